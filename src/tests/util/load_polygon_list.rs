use std::{error, fs, io, path::Path};
use std::io::BufRead;

/// Loads polygons from a text file: one `x y` pair per line, polygons separated by blank lines.
/// Lines starting with `#` are ignored.
pub fn load_polygon_list<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<[f64; 2]>>, Box<dyn error::Error>> {
    let mut output = Vec::new();
    let mut current = Vec::new();
    let f = fs::File::open(path)?;
    for line in io::BufReader::new(f).lines() {
        let line = line?;
        if line.trim_start().starts_with('#') {
            continue;
        }
        let mut chunks = line.split_ascii_whitespace();
        if let Some(x) = chunks.next() {
            let x = x.parse::<f64>()?;
            let y = chunks.next().ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "Invalid input file"))?.parse::<f64>()?;
            current.push([x, y]);
        } else if !current.is_empty() {
            output.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        output.push(current);
    }

    Ok(output)
}
