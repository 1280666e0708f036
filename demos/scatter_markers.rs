//! Draws randomly colored square markers over a world coastline map and
//! writes `scatter_map.png` and `scatter_map.svg` to the working directory.

use mapa_viz::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg64;

fn main() -> Result<()> {
    let field = MarkerField::world_grid()?;

    // Fixed seed so reruns produce the same marker pattern
    let mut rng = Pcg64::seed_from_u64(42);
    let markers = field.sample(&mut rng);
    println!(
        "Sampled {} markers from {} grid cells",
        markers.len(),
        field.cell_count()
    );

    let mut figure = MapFigure::new();
    figure.coastlines();
    figure.scatter(markers, field.style());
    figure.title("Dummy markers over a map");

    figure.save_png("scatter_map.png")?;
    figure.save_svg("scatter_map.svg")?;
    println!("Wrote scatter_map.png and scatter_map.svg");

    Ok(())
}
