//! # Cinematch Store
//!
//! Loads the precomputed inputs of the recommendation engine from disk:
//! the movie catalog (a JSON array of records) and the similarity matrix (a
//! JSON array of rows). Files ending in `.gz` are gunzipped on the fly.
//!
//! Loading happens once at startup; any error here is fatal for serving.

pub mod error;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use cinematch_core::{Movie, MovieContext, SimilarityMatrix};
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

pub use error::{Result, StoreError};

/// Catalog file name inside a data directory.
pub const CATALOG_FILE: &str = "movies.json";
/// Matrix file name inside a data directory.
pub const MATRIX_FILE: &str = "similarity.json";
/// Compressed matrix file name, preferred when present.
pub const MATRIX_FILE_GZ: &str = "similarity.json.gz";

/// Default data directory (`<platform data dir>/cinematch`).
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cinematch")
}

/// Locations of the catalog and matrix files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub catalog: PathBuf,
    pub matrix: PathBuf,
}

impl DataPaths {
    /// Standard file layout inside `dir`. The gzipped matrix wins if it exists.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let gz = dir.join(MATRIX_FILE_GZ);
        let matrix = if gz.exists() {
            gz
        } else {
            dir.join(MATRIX_FILE)
        };

        Self {
            catalog: dir.join(CATALOG_FILE),
            matrix,
        }
    }

    /// Standard layout inside [`default_data_dir`].
    pub fn default_dir() -> Self {
        Self::new(default_data_dir())
    }

    /// Override the catalog path.
    pub fn with_catalog(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog = path.into();
        self
    }

    /// Override the matrix path.
    pub fn with_matrix(mut self, path: impl Into<PathBuf>) -> Self {
        self.matrix = path.into();
        self
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let reader: Box<dyn Read> = if is_gzip(path) {
        Box::new(GzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    serde_json::from_reader(reader).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the movie catalog.
///
/// # Errors
///
/// Returns `StoreError::Io` if the file cannot be read and
/// `StoreError::Json` if it is not an array of movie records.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Movie>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading catalog");
    let movies: Vec<Movie> = read_json(path)?;
    info!(movies = movies.len(), "catalog loaded");
    Ok(movies)
}

/// Loads and validates the similarity matrix.
///
/// # Errors
///
/// Returns `StoreError::Io`/`StoreError::Json` on read or parse failure and
/// `StoreError::Context` if the matrix is not square, symmetric and within
/// `[0.0, 1.0]`.
pub fn load_matrix(path: impl AsRef<Path>) -> Result<SimilarityMatrix> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading similarity matrix");
    let rows: Vec<Vec<f64>> = read_json(path)?;
    let matrix = SimilarityMatrix::from_rows(rows)?;
    info!(size = matrix.size(), "similarity matrix loaded");
    Ok(matrix)
}

/// Loads both inputs and assembles the query context.
///
/// # Errors
///
/// Any load error, or `StoreError::Context` if the catalog is empty or its
/// size differs from the matrix dimension.
pub fn load_context(paths: &DataPaths) -> Result<MovieContext> {
    let movies = load_catalog(&paths.catalog)?;
    let matrix = load_matrix(&paths.matrix)?;
    Ok(MovieContext::new(movies, matrix)?)
}
