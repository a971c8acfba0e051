// src/csv.rs
use std::io::{self, Write};

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Whole table as one string, header line first when given.
pub fn to_export_string<S: AsRef<str>>(
    headers: Option<&[S]>,
    rows: &[Vec<String>],
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let rows = vec![
            vec![s!("Jane Doe"), s!("\"Headline, with comma\"")],
            vec![s!("Plain"), s!("")],
        ];
        let out = to_export_string(Some(&["name", "reference_name"][..]), &rows, ',');
        assert_eq!(
            out,
            "name,reference_name\nJane Doe,\"\"\"Headline, with comma\"\"\"\nPlain,\n"
        );
    }

    #[test]
    fn tsv_leaves_commas_alone() {
        let rows = vec![vec![s!("a,b"), s!("c")]];
        assert_eq!(to_export_string::<&str>(None, &rows, '\t'), "a,b\tc\n");
    }
}
