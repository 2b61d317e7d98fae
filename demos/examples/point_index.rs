// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point index diagnostics.
//!
//! Reads whitespace-separated `x y` pairs from stdin, stores each point with its
//! input position as the value, then reports size, containment of the query point,
//! a range query, and nearest / k-nearest queries.
//!
//! Run:
//! - `cargo run -p planar_demos --example point_index -- 0.5 0.5 3 < points.txt`
//! - `cargo run -p planar_demos --example point_index -- --backend brute -- -0.2 0.1 5`
//!
//! Set `RUST_LOG=planar_index=debug` to see visit/prune counts on stderr.

use std::error::Error;
use std::io::{self, Read, Write};

use clap::{Parser, ValueEnum};
use planar_index::{Backend, BruteForce, IndexGeneric, KdTree, Point2D, Rect};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Build a point index from stdin and run sample queries")]
struct Args {
    /// Query point x coordinate.
    #[arg(allow_negative_numbers = true)]
    qx: f64,
    /// Query point y coordinate.
    #[arg(allow_negative_numbers = true)]
    qy: f64,
    /// Neighbor count for the k-nearest query.
    k: usize,
    /// Range query rectangle.
    #[arg(
        long,
        num_args = 4,
        value_names = ["MIN_X", "MIN_Y", "MAX_X", "MAX_Y"],
        default_values_t = [-1.0, -1.0, 1.0, 1.0],
        allow_negative_numbers = true
    )]
    rect: Vec<f64>,
    /// Index implementation to query.
    #[arg(long, value_enum, default_value_t = BackendKind::Kdtree)]
    backend: BackendKind,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum BackendKind {
    /// 2D-tree.
    Kdtree,
    /// Linear scans.
    Brute,
}

#[derive(Debug, thiserror::Error)]
enum InputError {
    #[error("failed to read points")]
    Read(#[from] io::Error),
    #[error("token {index} ({token:?}) is not a number")]
    NotANumber { index: usize, token: String },
    #[error("expected coordinate pairs, got {0} values")]
    Unpaired(usize),
}

fn read_points(input: &str) -> Result<Vec<Point2D>, InputError> {
    let coords = input
        .split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            token.parse::<f64>().map_err(|_| InputError::NotANumber {
                index,
                token: token.to_owned(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if coords.len() % 2 != 0 {
        return Err(InputError::Unpaired(coords.len()));
    }
    Ok(coords
        .chunks_exact(2)
        .map(|c| Point2D::new(c[0], c[1]))
        .collect())
}

fn report<B: Backend<usize> + Default>(
    points: &[Point2D],
    query: Point2D,
    rect: Rect,
    k: usize,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let mut idx: IndexGeneric<usize, B> = IndexGeneric::new();
    for (i, p) in points.iter().copied().enumerate() {
        let _ = idx.put(p, i)?;
    }
    tracing::info!(read = points.len(), stored = idx.len(), "index built");

    writeln!(out, "empty? {}", idx.is_empty())?;
    writeln!(out, "size = {}", idx.len())?;
    writeln!(out, "contains {query}? {}", idx.contains(query)?)?;
    writeln!(out, "range {rect}:")?;
    for p in idx.range(rect)? {
        writeln!(out, "  {p}")?;
    }
    match idx.nearest(query)? {
        Some(p) => writeln!(out, "nearest {query} = {p}")?,
        None => writeln!(out, "nearest {query} = none")?,
    }
    writeln!(out, "nearest {k} to {query}:")?;
    for p in idx.nearest_k(query, k)? {
        writeln!(out, "  {p}")?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(InputError::from)?;
    let points = read_points(&input)?;

    let query = Point2D::new(args.qx, args.qy);
    let rect = Rect::new(args.rect[0], args.rect[1], args.rect[2], args.rect[3]);
    let mut out = io::stdout().lock();
    match args.backend {
        BackendKind::Kdtree => report::<KdTree<usize>>(&points, query, rect, args.k, &mut out),
        BackendKind::Brute => report::<BruteForce<usize>>(&points, query, rect, args.k, &mut out),
    }
}
