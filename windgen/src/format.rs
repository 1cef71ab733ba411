use std::io::Write;

use crate::error::WindProfileError;
use crate::profile::WindProfileGenerator;
use crate::sample::Sample;

pub const HEADER: [&str; 2] = [
    "! Wind sinusoidal",
    "! Time\tWind\tWind\tVert.\tHoriz.\tVert.\tLinV\tGust",
];

pub fn format_sample(sample: &Sample) -> String {
    sample
        .columns()
        .iter()
        .map(|value| format!("{:.2}", value))
        .collect::<Vec<_>>()
        .join("\t")
}

pub fn write_profile<W: Write>(
    writer: &mut W,
    generator: &WindProfileGenerator,
) -> Result<(), WindProfileError> {
    for line in HEADER {
        writeln!(writer, "{}", line)?;
    }
    for sample in generator.generate() {
        writeln!(writer, "{}", format_sample(&sample))?;
    }
    writer.flush()?;

    Ok(())
}

pub fn render_profile(generator: &WindProfileGenerator) -> Result<String, WindProfileError> {
    let mut buffer = Vec::new();
    write_profile(&mut buffer, generator)?;

    String::from_utf8(buffer)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}
