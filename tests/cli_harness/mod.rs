use clap::Parser;
use planes::cli::{Cli, run_cli};
use planes::output::Output;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

// collects everything the command prints
#[derive(Clone, Default)]
pub struct SharedWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedWriter {
    pub fn contents(&self) -> anyhow::Result<String> {
        let buffer = self
            .buffer
            .lock()
            .map_err(|_| anyhow::anyhow!("buffer poisoned"))?;
        Ok(String::from_utf8_lossy(&buffer).into())
    }
}

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .map_err(|_| std::io::Error::other("buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

pub async fn run_planes_cli_command(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("planes").chain(args.iter().copied()))?;

    let writer = SharedWriter::default();
    let boxed: Box<dyn Write + Send + Sync> = Box::new(writer.clone());
    run_cli(cli, Output::Override(Arc::new(Mutex::new(boxed)))).await?;

    let output = writer.contents()?;
    println!(
        "{}",
        output
            .lines()
            .map(|l| format!("     > {}", l))
            .collect::<Vec<String>>()
            .join("\n")
    );
    Ok(output)
}

pub async fn run_with_db(db: &Path, args: &[&str]) -> anyhow::Result<String> {
    let db = db.to_string_lossy().into_owned();
    let mut full: Vec<&str> = args.to_vec();
    full.extend(["--db", db.as_str()]);
    run_planes_cli_command(&full).await
}

pub fn table_rows(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter(|l| l.starts_with('|') && !l.starts_with("|-"))
        .skip(1)
        .collect()
}
