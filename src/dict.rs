//! The [`ObjectDict`] container and its iterators.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//!
//! use objdict::ObjectDict;
//!
//! let mut dict = ObjectDict::from_mapping([
//!     ("name", "Descartes"),
//!     ("country", "Grece"),
//! ])?;
//!
//! // Attribute-style and key-style access refer to the same slot.
//! dict.set_attribute("country", "Greece")?;
//! assert_eq!(dict["country"].as_str(), Some("Greece"));
//! assert_eq!(dict.get("country").and_then(|v| v.as_str()), Some("Greece"));
//!
//! dict.insert("works", HashMap::from([("first", "Musicae Compendium")]))?;
//! assert_eq!(dict.lookup("works.first")?.as_str(), Some("Musicae Compendium"));
//!
//! assert!(dict.keys().eq(["country", "name", "works"]));
//! # Ok::<_, objdict::Error>(())
//! ```

mod iter;
pub use self::iter::{Iter, Keys, Values};

mod object_dict;
pub use self::object_dict::ObjectDict;
