pub mod article;
pub mod boundary;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod headline;
pub mod links;
pub mod output;
pub mod paragraphs;
pub mod reflow;
pub mod settings;

pub use article::Article;
pub use boundary::article_span;
pub use error::{OcherkError, Result};
pub use extract::{extract_article, extract_article_with_url};
pub use fetch::FetchConfig;
pub use fetch::decode_body;
#[cfg(feature = "fetch")]
pub use fetch::fetch_url;
pub use headline::extract_headline;
pub use links::{extract_url, rewrite_paragraph, strip_markup};
pub use output::{output_path, write_article};
pub use paragraphs::extract_paragraphs;
pub use reflow::{DEFAULT_WIDTH, dedent, fill, reflow};
pub use settings::{SETTINGS_FILE, Settings};
