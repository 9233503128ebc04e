// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

/// Declares a string-valued wire enum that never fails to decode.
///
/// Each listed variant maps to its wire text. Any other text lands in
/// `Unknown(String)` and is written back unchanged by `as_str`, `Display`
/// and serialization. The calling crate must depend on `serde`.
///
/// ```ignore
/// nimbus_common_http::wire_enum! {
/// 	pub enum Tier {
/// 		Free = "free",
/// 		Advanced = "advanced",
/// 	}
/// }
/// ```
#[macro_export]
macro_rules! wire_enum {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident {
			$($variant:ident = $wire:literal),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
		#[serde(from = "String", into = "String")]
		$vis enum $name {
			$($variant,)+
			Unknown(String),
		}

		impl $name {
			/// Every variant with a fixed wire text.
			pub fn known() -> Vec<$name> {
				vec![$($name::$variant),+]
			}

			pub fn as_str(&self) -> &str {
				match self {
					$($name::$variant => $wire,)+
					$name::Unknown(s) => s.as_str(),
				}
			}

			pub fn is_known(&self) -> bool {
				!matches!(self, $name::Unknown(_))
			}
		}

		impl From<String> for $name {
			fn from(s: String) -> Self {
				match s.as_str() {
					$($wire => $name::$variant,)+
					_ => $name::Unknown(s),
				}
			}
		}

		impl From<&str> for $name {
			fn from(s: &str) -> Self {
				$name::from(s.to_string())
			}
		}

		impl From<$name> for String {
			fn from(v: $name) -> String {
				match v {
					$name::Unknown(s) => s,
					known => known.as_str().to_string(),
				}
			}
		}

		impl ::std::str::FromStr for $name {
			type Err = ::std::convert::Infallible;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Ok($name::from(s))
			}
		}

		impl ::std::fmt::Display for $name {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				f.write_str(self.as_str())
			}
		}
	};
}
