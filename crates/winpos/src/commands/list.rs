use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use super::CliResult;

pub fn windows() -> CliResult {
    let windows = winpos_windows::visible_titled_windows()?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("HWND"),
            Cell::new("PID").set_alignment(CellAlignment::Right),
            Cell::new("Title"),
            Cell::new("Rect (left, top, right, bottom)"),
        ]);

    for window in &windows {
        // A window can close between enumeration and this query.
        let rect = window
            .rect()
            .map(|r| r.to_string())
            .unwrap_or_else(|_| "-".into());

        table.add_row(vec![
            Cell::new(window.handle()),
            Cell::new(window.process_id()).set_alignment(CellAlignment::Right),
            Cell::new(window.title()),
            Cell::new(rect),
        ]);
    }

    println!("{table}");
    println!("\n{} windows found", windows.len());
    Ok(())
}

pub fn processes() -> CliResult {
    let processes = winpos_windows::processes()?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("PID").set_alignment(CellAlignment::Right),
            Cell::new("Executable"),
        ]);

    for process in &processes {
        table.add_row(vec![
            Cell::new(process.pid).set_alignment(CellAlignment::Right),
            Cell::new(&process.exe),
        ]);
    }

    println!("{table}");
    println!("\n{} processes found", processes.len());
    Ok(())
}
