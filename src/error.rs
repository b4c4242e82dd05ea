//! Errors raised while loading page-embedded data.

use thiserror::Error;

/// Why a `<script type="application/json">` element could not be read.
#[derive(Error, Debug)]
pub enum LoadError {
	/// Not running in a browser window with a document
	#[error("no document available")]
	NoDocument,

	/// No element carries the requested id
	#[error("no element with id {0:?}")]
	MissingElement(String),

	/// The element exists but is not a `<script>`
	#[error("element {0:?} is not a script element")]
	NotAScript(String),

	/// The script text could not be read
	#[error("element {0:?} has no readable text")]
	Unreadable(String),

	/// JSON parsing error from serde_json
	#[error("JSON parse error: {0}")]
	Json(#[from] serde_json::Error),
}

/// Result type alias for page loading
pub type LoadResult<T> = Result<T, LoadError>;
