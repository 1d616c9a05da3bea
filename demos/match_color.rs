//! Simple helper to resolve an RGB triple to its nearest catalog color
//! Usage: cargo run --example match_color -- <R> <G> <B>

use roomscan::{color::clamped_rgb, ColorCatalog, ColorMatcher};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 4 {
        eprintln!("Usage: {} <R> <G> <B>", args[0]);
        eprintln!("Example: {} 156 175 136", args[0]);
        std::process::exit(1);
    }

    let r: i64 = args[1].parse().expect("Invalid R value");
    let g: i64 = args[2].parse().expect("Invalid G value");
    let b: i64 = args[3].parse().expect("Invalid B value");

    // Out-of-range channels are clamped rather than rejected
    let rgb = clamped_rgb(r, g, b);

    let catalog = ColorCatalog::builtin();
    let matched = ColorMatcher::new(&catalog).match_color(rgb);

    println!(
        "{} (suits: {})",
        matched.name,
        matched.room_types.join(", ")
    );
}
