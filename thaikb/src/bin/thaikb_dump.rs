use anyhow::Result;
use clap::Parser;
use thaikb::libthai_core::keymap::{layout_rows, KeyboardLayout, EVDEV_OFFSET};
use thaikb::qwerty::label_for_keycode;

#[derive(Parser, Debug)]
#[command(author, version, about = "Print Thai keyboard layout tables", long_about = None)]
struct Args {
    /// Layouts to print (all when omitted)
    layouts: Vec<KeyboardLayout>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let layouts = if args.layouts.is_empty() {
        KeyboardLayout::ALL.to_vec()
    } else {
        args.layouts
    };

    for layout in layouts {
        println!("=== {} ({}) ===", layout.description(), layout.name());
        println!("{:>5} {:>5} {:>5}  {:<6}{:<6}{:<6}", "evdev", "x11", "key", "L0", "L1", "L2");

        let mut rows = layout_rows(layout).to_vec();
        rows.sort_by_key(|row| row.keycode);
        for row in rows {
            let label = label_for_keycode(row.keycode).map_or(String::new(), |c| format!("{:?}", c));
            let cells: Vec<String> = row
                .levels
                .iter()
                .map(|c| c.to_char().filter(|_| c.byte() != 0).map_or("-".to_string(), String::from))
                .collect();
            println!(
                "{:>5} {:>5} {:>5}  {:<6}{:<6}{:<6}",
                row.keycode,
                row.keycode + EVDEV_OFFSET,
                label,
                cells[0],
                cells[1],
                cells[2]
            );
        }
        println!();
    }

    Ok(())
}
