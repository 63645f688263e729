use comfy_table::{Cell, Color};

use crate::core::DrinkList;
use crate::output::format::{create_styled_table, format_number, header_cell, right_cell};

#[derive(Debug, Clone, Copy)]
pub(crate) struct TableOptions {
    pub(crate) use_color: bool,
}

/// Print the tally as a table followed by where (or whether) it was written
pub(crate) fn print_drinklist_table(list: &DrinkList, opts: TableOptions) {
    if list.entries.is_empty() {
        println!("No drinks found.");
    } else {
        let c = opts.use_color;
        let mut table = create_styled_table();
        table.set_header(vec![header_cell("Drink", c), header_cell("Count", c)]);

        for entry in &list.entries {
            table.add_row(vec![
                Cell::new(&entry.name),
                right_cell(&format_number(entry.count), None, false),
            ]);
        }

        let total_color = if c { Some(Color::Yellow) } else { None };
        table.add_row(vec![
            header_cell("TOTAL", c),
            right_cell(&format_number(list.total), total_color, true),
        ]);

        println!("\n  Strecklista {}\n", list.generated);
        println!("{table}");
    }

    match &list.file {
        Some(path) => println!("\n  Created {}\n", path.display()),
        None => println!("\n  Dry run: no report written\n"),
    }
}
