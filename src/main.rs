//! `cuby`: build one cube, turn one face once, print every face.

use clap::Parser;

use rust_cube::{render_cube, Cube, Direction, FaceLabel, RenderStyle};

#[derive(Parser, Debug)]
#[command(name = "cuby", about = "Rubik's cube: turn one face of an NxN cube")]
struct Args {
    /// Rotate the cube in direction [f: forward, r: reverse]
    #[arg(short, long, default_value = "f")]
    direction: Direction,

    /// Rotate face [f, b, l, r, u, d]
    #[arg(short, long, default_value = "f")]
    face: FaceLabel,

    /// Cube size
    #[arg(short = 'z', long, default_value_t = 3)]
    size: usize,

    /// Print each cell with its home row and column
    #[arg(short, long)]
    tagged: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    println!(
        "Creating a cube of size {} and rotate face {} in direction {}",
        args.size, args.face, args.direction
    );

    let mut cube = Cube::new(args.size)?;
    cube.rotate(args.face, args.direction);

    let style = if args.tagged {
        RenderStyle::Tagged
    } else {
        RenderStyle::Colors
    };
    print!("{}", render_cube(&cube, style));

    Ok(())
}
