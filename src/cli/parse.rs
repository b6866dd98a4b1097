use clap::{Parser, Subcommand};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "termchart",
    about = "Bar, scatter, line, pie and histogram charts as character grids"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Horizontal bar chart from label,value rows
    Bar(BarArgs),
    /// Scatter plot from x,y rows
    Scatter(XyArgs),
    /// Line chart from x,y rows
    Line(XyArgs),
    /// Pie chart from label,value rows
    Pie(PieArgs),
    /// Histogram from one numeric column
    Hist(HistArgs),
    /// Show recognized color names
    Colors,
    /// Print example invocations
    Examples,
}

/// `termchart bar …`
#[derive(Parser, Debug)]
pub struct BarArgs {
    /// CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Total chart width; defaults to the terminal width, capped at 80
    #[arg(long)]
    pub max_width: Option<usize>,

    /// Chart title
    #[arg(short, long)]
    pub title: Option<String>,

    /// X-axis label
    #[arg(long)]
    pub xlabel: Option<String>,

    /// Y-axis label
    #[arg(long)]
    pub ylabel: Option<String>,

    /// Bar color (unrecognized names render uncolored)
    #[arg(short, long)]
    pub color: Option<String>,

    /// Write the chart to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,
}

/// `termchart scatter …` / `termchart line …`
#[derive(Parser, Debug)]
pub struct XyArgs {
    /// CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Plot-area width in columns
    #[arg(short, long, default_value_t = 50)]
    pub width: usize,

    /// Plot-area height in rows
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Chart title
    #[arg(short, long)]
    pub title: Option<String>,

    /// X-axis label
    #[arg(long)]
    pub xlabel: Option<String>,

    /// Y-axis label
    #[arg(long)]
    pub ylabel: Option<String>,

    /// Series color (unrecognized names render uncolored)
    #[arg(short, long)]
    pub color: Option<String>,

    /// Marker character for plotted points
    #[arg(short, long, default_value_t = '*')]
    pub marker: char,

    /// Write the chart to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,
}

/// `termchart pie …`
#[derive(Parser, Debug)]
pub struct PieArgs {
    /// CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Pie radius in cells
    #[arg(short, long, default_value_t = 10)]
    pub radius: usize,

    /// Chart title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Skip the legend block
    #[arg(long)]
    pub no_legend: bool,
}

/// `termchart hist …`
#[derive(Parser, Debug)]
pub struct HistArgs {
    /// CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Number of equal-width bins
    #[arg(short, long, default_value_t = 10)]
    pub bins: usize,

    /// Chart width in columns
    #[arg(short, long, default_value_t = 80)]
    pub width: usize,

    /// Bar-area height in rows
    #[arg(long, default_value_t = 10)]
    pub height: usize,

    /// Chart title
    #[arg(short, long)]
    pub title: Option<String>,

    /// X-axis label
    #[arg(long)]
    pub xlabel: Option<String>,

    /// Y-axis label (suffixed with "(count)")
    #[arg(long)]
    pub ylabel: Option<String>,

    /// Bar color (unrecognized names render uncolored)
    #[arg(short, long)]
    pub color: Option<String>,

    /// Fill character for the bars
    #[arg(long = "char", default_value_t = '█')]
    pub fill: char,
}
