use std::time::Instant;

use terminal_size::{Width, terminal_size};

use crate::{
    chart,
    core::{
        color::Color,
        constants::DEFAULT_BAR_WIDTH,
        data::{read_labeled_from_path, read_values_from_path, read_xy_from_path},
        error::GraphError,
        options::{BarOptions, HistOptions, PieOptions, XyOptions},
        series::Series,
    },
};

use super::parse::{BarArgs, HistArgs, PieArgs, XyArgs};

/// Terminal width with an 80-column fallback, capped at the default.
fn auto_bar_width() -> usize {
    let cols = terminal_size().map_or(80, |(Width(w), _)| usize::from(w));
    cols.min(DEFAULT_BAR_WIDTH)
}

fn opt_color(name: Option<&str>) -> Color {
    name.map_or(Color::None, Color::from_name)
}

pub fn bar(a: BarArgs) -> Result<(), GraphError> {
    let t_ingest = Instant::now();
    let (labels, values) = read_labeled_from_path(&a.file)?;
    if a.debug {
        eprintln!(
            "CSV ingest: {} µs   ({} rows)",
            t_ingest.elapsed().as_micros(),
            labels.len()
        );
    }

    let mut opts = BarOptions::default()
        .max_width(a.max_width.unwrap_or_else(auto_bar_width))
        .color(opt_color(a.color.as_deref()));
    opts.title = a.title;
    opts.xlabel = a.xlabel;
    opts.ylabel = a.ylabel;
    opts.output_file = a.output.map(Into::into);

    chart::bar(&labels, &values, &opts)
}

pub fn xy(a: XyArgs, connect: bool) -> Result<(), GraphError> {
    let t_ingest = Instant::now();
    let (xs, ys) = read_xy_from_path(&a.file)?;
    if a.debug {
        eprintln!(
            "CSV ingest: {} µs   ({} rows)",
            t_ingest.elapsed().as_micros(),
            xs.len()
        );
    }

    let series = Series::new(xs, ys)
        .color(opt_color(a.color.as_deref()))
        .marker(a.marker);

    let mut opts = XyOptions::default().width(a.width).height(a.height);
    opts.title = a.title;
    opts.xlabel = a.xlabel;
    opts.ylabel = a.ylabel;
    opts.output_file = a.output.map(Into::into);

    if connect {
        chart::line(&[series], &opts)
    } else {
        chart::scatter(&[series], &opts)
    }
}

pub fn pie(a: PieArgs) -> Result<(), GraphError> {
    let (labels, values) = read_labeled_from_path(&a.file)?;
    let mut opts = PieOptions::default().radius(a.radius).legend(!a.no_legend);
    opts.title = a.title;
    chart::pie(&labels, &values, &opts)
}

pub fn hist(a: HistArgs) -> Result<(), GraphError> {
    let data = read_values_from_path(&a.file)?;
    let mut opts = HistOptions::default()
        .bins(a.bins)
        .width(a.width)
        .height(a.height)
        .color(opt_color(a.color.as_deref()))
        .fill(a.fill);
    opts.title = a.title;
    opts.xlabel = a.xlabel;
    opts.ylabel = a.ylabel;
    chart::hist(&data, &opts)
}

pub fn colors() {
    println!("Recognized color names:");
    for name in Color::names() {
        let c = Color::from_name(name);
        println!("  {}{name}{}", c.code(), crate::core::color::RESET);
    }
    println!("Anything else renders uncolored.");
}

pub fn examples() {
    println!("Examples:");
    println!("  termchart bar sales.csv --title 'Q3 Sales' --color green");
    println!("  termchart scatter points.csv -w 60 --height 24 --marker x");
    println!("  cat series.csv | termchart line - --title Trend -o trend.txt");
    println!("  termchart pie share.csv --radius 12 --no-legend");
    println!("  termchart hist samples.csv --bins 5 --color magenta");
}
