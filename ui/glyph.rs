#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
	AlertTriangle,
	AlertCircle,
	InfoCircle,
	CheckCircle,
	XCircle,
	Bell,
}

impl Glyph {
	pub const ALL: [Glyph; 6] = [
		Glyph::AlertTriangle,
		Glyph::AlertCircle,
		Glyph::InfoCircle,
		Glyph::CheckCircle,
		Glyph::XCircle,
		Glyph::Bell,
	];

	pub fn from_name(name: &str) -> Option<Glyph> {
		Glyph::ALL.iter().copied().find(|glyph| glyph.name() == name)
	}

	pub fn name(self) -> &'static str {
		match self {
			Glyph::AlertTriangle => "alert-triangle",
			Glyph::AlertCircle => "alert-circle",
			Glyph::InfoCircle => "info-circle",
			Glyph::CheckCircle => "check-circle",
			Glyph::XCircle => "x-circle",
			Glyph::Bell => "bell",
		}
	}

	pub fn path(self) -> &'static str {
		match self {
			Glyph::AlertTriangle => {
				"M10.3 3.9L1.8 18a2 2 0 0 0 1.7 3h17a2 2 0 0 0 1.7-3L13.7 3.9a2 2 0 0 0-3.4 0zM11 9h2v5h-2zM11 16h2v2h-2z"
			}
			Glyph::AlertCircle => {
				"M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20zM11 7h2v6h-2zM11 15h2v2h-2z"
			}
			Glyph::InfoCircle => {
				"M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20zM11 11h2v6h-2zM11 7h2v2h-2z"
			}
			Glyph::CheckCircle => {
				"M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20zM10 14.2l-2.6-2.6L6 13l4 4l8-8l-1.4-1.4z"
			}
			Glyph::XCircle => {
				"M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20zM15.6 7L12 10.6L8.4 7L7 8.4l3.6 3.6L7 15.6L8.4 17l3.6-3.6l3.6 3.6l1.4-1.4l-3.6-3.6L17 8.4z"
			}
			Glyph::Bell => {
				"M12 22a2 2 0 0 0 2-2h-4a2 2 0 0 0 2 2zM18 16v-5a6 6 0 0 0-5-5.9V4a1 1 0 0 0-2 0v1.1A6 6 0 0 0 6 11v5l-2 2v1h16v-1z"
			}
		}
	}
}

impl std::fmt::Display for Glyph {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

#[test]
fn test_glyph_names() {
	for glyph in Glyph::ALL.iter().copied() {
		assert_eq!(Glyph::from_name(glyph.name()), Some(glyph));
	}
	assert_eq!(Glyph::from_name("alert-triangle"), Some(Glyph::AlertTriangle));
	assert_eq!(Glyph::from_name("Alert-Triangle"), None);
	assert_eq!(Glyph::from_name(""), None);
}
