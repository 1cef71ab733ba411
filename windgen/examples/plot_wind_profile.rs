use std::fs;

use nalgebra::DVector;
use plotters::prelude::*;

extern crate windgen;
use windgen::{WindProfileConfig, WindProfileGenerator};

fn plot(
    t: &DVector<f64>,
    series: &[(&DVector<f64>, &str)],
    y_max: f64,
    (w, h): (u32, u32),
    path: &str,
    title: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (w, h)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30, FontStyle::Normal).into_font())
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(t.min()..t.max(), 0.0..y_max * 1.05)?;

    chart
        .configure_mesh()
        .x_desc("time [s]")
        .y_desc("wind speed [m/s]")
        .x_label_style(("sans-serif", 25, FontStyle::Normal).into_font())
        .y_label_style(("sans-serif", 25, FontStyle::Normal).into_font())
        .draw()?;

    for (i, (y, label)) in series.iter().enumerate() {
        let color = Palette99::pick(3 + i);
        chart
            .draw_series(LineSeries::new(
                t.iter().copied().zip(y.iter().copied()),
                color.stroke_width(2),
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], Palette99::pick(3 + i)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = WindProfileConfig::default();
    let generator = WindProfileGenerator::new(config)?;

    let t = generator.times();
    let wind_speed = generator.wind_speeds();
    let steady_state = generator.steady_state_speeds();

    let plot_dir = "examples/plots";
    if !std::path::Path::new(plot_dir).exists() {
        fs::create_dir_all(plot_dir)?;
    }

    plot(
        &t,
        &[(&steady_state, "steady state"), (&wind_speed, "ramped")],
        config.peak_speed,
        (1200, 600),
        &format!("{}/wind_profile.png", plot_dir),
        "ramped sinusoidal wind",
    )
}
