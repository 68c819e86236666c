use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use colored::Colorize;
use log::debug;
use path_clean::clean;

use crate::types::Record;

/// Local files of a relative crawl that sit outside every package, as
/// absolute paths. `first_entry` is the first path passed to the crawl.
pub fn local_files(records: &[Record], first_entry: &Path) -> Vec<PathBuf> {
    let base = first_entry.parent().unwrap_or(first_entry);
    records
        .iter()
        .filter(|r| !r.module && r.mgroup.is_none())
        .filter_map(|r| r.filename.as_ref())
        .map(|f| clean(base.join(f)))
        .collect()
}

pub fn print_records<W: Write>(writer: &mut W, records: &[Record]) -> io::Result<()> {
    debug!("Printing {} records", records.len());

    for record in records {
        let kind = if record.native {
            "native".magenta()
        } else if record.module {
            "module".cyan()
        } else {
            "file".green()
        };

        write!(writer, "{} {}", record.id.bright_white().bold(), format!("[{}]", kind).dimmed())?;
        if let Some(group) = &record.mgroup {
            write!(writer, " {}", format!("group: {}", group).yellow())?;
        }
        writeln!(writer)?;

        if let Some(filename) = &record.filename {
            writeln!(writer, "{}  {}", "│".dimmed(), filename.display().to_string().blue())?;
        }
        if let Some(error) = &record.error {
            writeln!(writer, "{}  {} {}", "│".dimmed(), "✗".red().bold(), error.red())?;
        }

        for (idx, parent) in record.parents.iter().enumerate() {
            let is_last = idx == record.parents.len() - 1;
            let prefix = if is_last { "└──" } else { "├──" };
            writeln!(writer, "{} {}", prefix.dimmed(), parent.display())?;
        }

        writeln!(writer)?;
    }

    print_summary(writer, records)?;
    writer.flush()?;
    Ok(())
}

fn print_summary<W: Write>(writer: &mut W, records: &[Record]) -> io::Result<()> {
    let files = records.iter().filter(|r| !r.module).count();
    let native = records.iter().filter(|r| r.native).count();
    let packages = records.len() - files - native;
    let errors = records.iter().filter(|r| r.error.is_some()).count();

    writeln!(writer, "{}", "─".repeat(60).dimmed())?;
    writeln!(writer, "{}", "Summary".bold())?;
    writeln!(writer, "  Files: {}", files.to_string().cyan())?;
    writeln!(writer, "  Packages: {}", packages.to_string().cyan())?;
    writeln!(writer, "  Native modules: {}", native.to_string().cyan())?;
    if errors > 0 {
        writeln!(writer, "  Unreadable: {}", errors.to_string().red().bold())?;
    }
    Ok(())
}

pub fn print_local_files<W: Write>(writer: &mut W, files: &[PathBuf]) -> io::Result<()> {
    for file in files {
        writeln!(writer, "{}", file.display())?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, filename: Option<&str>, module: bool, mgroup: Option<&str>) -> Record {
        Record {
            id: id.to_string(),
            filename: filename.map(PathBuf::from),
            parents: vec![],
            module,
            native: module && filename.is_none(),
            mgroup: mgroup.map(str::to_string),
            error: None,
        }
    }

    #[test]
    fn test_local_files_skips_modules_and_groups() {
        let records = vec![
            record("main.js", Some("main.js"), false, None),
            record("util.js", Some("../lib/util.js"), false, None),
            record("fs", None, true, Some("fs")),
            record("fake", Some("node_modules/fake/index.js"), true, Some("fake")),
            record("inner.js", Some("node_modules/fake/inner.js"), false, Some("fake")),
        ];

        let files = local_files(&records, Path::new("/project/bin/main.js"));
        assert_eq!(files, vec![
            PathBuf::from("/project/bin/main.js"),
            PathBuf::from("/project/lib/util.js")
        ]);
    }

    #[test]
    fn test_print_records_lists_parents_and_errors() {
        colored::control::set_override(false);
        let mut child = record("b.js", Some("b.js"), false, None);
        child.parents = vec![PathBuf::from("a.js"), PathBuf::from("c.js")];
        child.error = Some("Failed to read b.js".to_string());
        let records = vec![record("a.js", Some("a.js"), false, None), child];

        let mut out = Vec::new();
        print_records(&mut out, &records).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("b.js [file]"));
        assert!(out.contains("├── a.js"));
        assert!(out.contains("└── c.js"));
        assert!(out.contains("Failed to read b.js"));
        assert!(out.contains("Unreadable: 1"));
    }

    #[test]
    fn test_print_local_files() {
        let mut out = Vec::new();
        print_local_files(&mut out, &[PathBuf::from("/p/a.js"), PathBuf::from("/p/b.js")])
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "/p/a.js\n/p/b.js\n");
    }
}
