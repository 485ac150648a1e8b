//! `termstream`: render Markdown from a file or stdin to ANSI-styled
//! terminal output, streaming as input arrives.

use std::fs::File;
use std::io;
use std::io::Read;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::bail;
use clap::Parser;
use termstream_render::StreamRenderer;
use tracing_subscriber::EnvFilter;

/// Render Markdown to ANSI-styled terminal output as it streams in.
#[derive(Debug, Parser)]
#[command(name = "termstream", version)]
struct Cli {
    /// Input file; reads stdin when omitted.
    file: Option<PathBuf>,

    /// Bytes per read chunk. Small values exercise streaming behavior.
    #[arg(long, default_value_t = 4096)]
    chunk_size: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(file = ?cli.file, chunk_size = cli.chunk_size, "starting render");
    let mut reader: Box<dyn Read> = match &cli.file {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        ),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut write_err: Option<io::Error> = None;
    let mut renderer = StreamRenderer::new(|rendered: &str| {
        if write_err.is_none()
            && let Err(err) = out.write_all(rendered.as_bytes())
        {
            write_err = Some(err);
        }
    });

    let mut buf = vec![0u8; cli.chunk_size.max(1)];
    // Carries bytes of a UTF-8 sequence split across read boundaries.
    let mut carry: Vec<u8> = Vec::new();
    loop {
        let n = reader.read(&mut buf).context("failed to read input")?;
        if n == 0 {
            break;
        }
        carry.extend_from_slice(&buf[..n]);
        let valid_len = match std::str::from_utf8(&carry) {
            Ok(chunk) => {
                renderer.write(chunk);
                carry.len()
            }
            Err(err) => {
                if err.error_len().is_some() {
                    bail!("input is not valid UTF-8");
                }
                let (head, _) = carry.split_at(err.valid_up_to());
                renderer.write(std::str::from_utf8(head)?);
                err.valid_up_to()
            }
        };
        carry.drain(..valid_len);
    }
    if !carry.is_empty() {
        bail!("input ended mid UTF-8 sequence");
    }
    renderer.flush();

    if let Some(err) = write_err {
        return Err(err).context("failed to write output");
    }
    out.flush().context("failed to flush output")?;
    Ok(())
}
