use colored::{ColoredString, Colorize};
use metar_core::{FlightCategory, Metar};
use std::io::{self, Write};

/// How loudly a flight category is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Good,
    Caution,
    Severe,
    Neutral,
}

impl Emphasis {
    pub fn for_category(category: &FlightCategory) -> Self {
        match category {
            FlightCategory::Vfr | FlightCategory::Mvfr => Emphasis::Good,
            FlightCategory::Ifr => Emphasis::Caution,
            FlightCategory::Lifr => Emphasis::Severe,
            FlightCategory::Unknown(_) => Emphasis::Neutral,
        }
    }

    fn paint(self, text: String) -> ColoredString {
        match self {
            Emphasis::Good => text.green().bold(),
            Emphasis::Caution => text.blue().bold(),
            Emphasis::Severe => text.red().bold(),
            Emphasis::Neutral => text.normal(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Append the observation time to each line.
    pub show_time: bool,
}

/// Write the reports framed by blank lines, one colored line per report.
pub fn render<W: Write>(out: &mut W, metars: &[Metar], options: RenderOptions) -> io::Result<()> {
    writeln!(out)?;
    for metar in metars {
        render_line(out, metar, options)?;
    }
    writeln!(out)?;
    out.flush()
}

fn render_line<W: Write>(out: &mut W, metar: &Metar, options: RenderOptions) -> io::Result<()> {
    let emphasis = Emphasis::for_category(&metar.flight_category);
    let label = emphasis.paint(format!("{:<4} ", metar.flight_category));

    write!(out, "{label}{}", metar.raw_text)?;
    if options.show_time {
        write!(out, " {}", metar.observation_time.format("%Y-%m-%d %H:%MZ"))?;
    }
    writeln!(out)
}
