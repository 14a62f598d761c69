use std::path::Path;

use plotters::prelude::*;
use wxreport::accuweather::forecast::Forecast;
use wxreport::series::ForecastSeries;

fn main() {
    let input = std::env::args().nth(1).expect("Missing forecast filename");
    println!("opening {input}");
    let output = format!("{input}.png");

    let forecast = Forecast::from_file(Path::new(&input)).unwrap();
    let series = ForecastSeries::from_days(&forecast.daily_forecasts).unwrap();

    let floor = series.minimums.iter().copied().fold(f64::INFINITY, f64::min) - 2.0;
    let ceil = series
        .maximums
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max)
        + 2.0;

    let root = BitMapBackend::new(&output, (1280, 720)).into_drawing_area();
    root.fill(&WHITE).unwrap();
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{} Day Forecast", series.days.len()),
            ("sans-serif", 40).into_font(),
        )
        .margin(5)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..series.days.len() as i32, floor..ceil)
        .unwrap();

    chart
        .configure_mesh()
        .x_labels(series.days.len())
        .x_label_formatter(&|index| {
            series
                .days
                .get(*index as usize)
                .cloned()
                .unwrap_or_default()
        })
        .y_desc("Temperature (°C)")
        .draw()
        .unwrap();

    chart
        .draw_series(LineSeries::new(
            series
                .minimums
                .iter()
                .copied()
                .enumerate()
                .map(|(index, temp)| (index as i32, temp)),
            BLUE,
        ))
        .unwrap()
        .label("Minimum Temp")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart
        .draw_series(LineSeries::new(
            series
                .maximums
                .iter()
                .copied()
                .enumerate()
                .map(|(index, temp)| (index as i32, temp)),
            RED,
        ))
        .unwrap()
        .label("Maximum Temp")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .unwrap();

    root.present().unwrap();
    println!("saved {output}");
}
