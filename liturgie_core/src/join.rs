/// Join items the way a Dutch enumeration reads: `a, b en c`.
///
/// Empty input yields an empty string and a single item is returned as is.
pub fn join_with_en<S: AsRef<str>>(items: &[S]) -> String {
	match items {
		[] => String::new(),
		[only] => only.as_ref().to_string(),
		[init @ .., last] => {
			let head = init.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ");
			format!("{head} en {}", last.as_ref())
		}
	}
}
