//! Recursive mappings with attribute-style access.
//!
//! An [`ObjectDict`] maps string keys to normalized [`Value`]s. Values are
//! normalized when they are stored: nested mappings become nested
//! [`ObjectDict`]s and nested sequences become sequences of normalized
//! values. Every level of a structure therefore supports the same access API.
//!
//! <br>
//!
//! ## Two views over one storage
//!
//! Attribute-style access goes through [`ObjectDict::get_attribute`] and
//! [`ObjectDict::set_attribute`], and reports missing names as errors.
//! Key-style access goes through [`ObjectDict::get`], [`ObjectDict::insert`]
//! and indexing. Both views read and write the same slots.
//!
//! ```
//! use std::collections::HashMap;
//!
//! use objdict::ObjectDict;
//!
//! let mut dict = ObjectDict::new();
//! dict.set_attribute("greeting", "Hello World!")?;
//! assert_eq!(dict["greeting"].as_str(), Some("Hello World!"));
//!
//! dict.insert("greeting", "Hello Rust!")?;
//! assert_eq!(dict.get_attribute("greeting")?.as_str(), Some("Hello Rust!"));
//!
//! // Nested mappings are converted on assignment.
//! dict.set_attribute("server", HashMap::from([("port", 8080)]))?;
//! assert_eq!(dict["server"]["port"].as_u16(), Some(8080));
//! # Ok::<_, objdict::Error>(())
//! ```
//!
//! <br>
//!
//! ## Dotted paths
//!
//! Chained attribute access like `config.b.c[2].d` is written as a path
//! passed to [`ObjectDict::lookup`].
//!
//! ```
//! use objdict::ObjectDict;
//!
//! let dict: ObjectDict = serde_yaml::from_str(r#"
//! a: 1
//! b:
//!   c: [1, 2, {d: x}]
//! "#)?;
//!
//! assert_eq!(dict.get_attribute("a")?.as_i64(), Some(1));
//! assert_eq!(dict.lookup("b.c[2].d")?.as_str(), Some("x"));
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! <br>
//!
//! ## Unsupported values
//!
//! Only booleans, integers, floats, strings, sequences and mappings can be
//! stored. Anything else fails with [`ErrorKind::UnsupportedValueKind`], and
//! the dict is left as it was.
//!
//! ```
//! use objdict::{ErrorKind, ObjectDict};
//!
//! let mut dict = ObjectDict::new();
//! let error = dict.set_attribute("x", ()).unwrap_err();
//! assert_eq!(error.kind(), &ErrorKind::UnsupportedValueKind("unit"));
//! assert!(dict.is_empty());
//! ```

#![deny(missing_docs)]
#![allow(clippy::module_inception)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]


mod error;
pub use self::error::{Error, ErrorKind};

mod value;
pub use self::value::Value;

mod normalize;
pub use self::normalize::{normalize, Normalize};

pub mod dict;
#[doc(inline)]
pub use self::dict::ObjectDict;

mod path;

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub mod serde;
