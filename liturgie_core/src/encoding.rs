/// Accented latin characters and their named html entities. Replacements are
/// applied in this order.
pub const HTML_ENTITIES: [(char, &str); 54] = [
	('á', "&aacute;"),
	('à', "&agrave;"),
	('â', "&acirc;"),
	('ä', "&auml;"),
	('ã', "&atilde;"),
	('å', "&aring;"),
	('é', "&eacute;"),
	('è', "&egrave;"),
	('ê', "&ecirc;"),
	('ë', "&euml;"),
	('í', "&iacute;"),
	('ì', "&igrave;"),
	('î', "&icirc;"),
	('ï', "&iuml;"),
	('ó', "&oacute;"),
	('ò', "&ograve;"),
	('ô', "&ocirc;"),
	('ö', "&ouml;"),
	('õ', "&otilde;"),
	('ú', "&uacute;"),
	('ù', "&ugrave;"),
	('û', "&ucirc;"),
	('ü', "&uuml;"),
	('ý', "&yacute;"),
	('ÿ', "&yuml;"),
	('ñ', "&ntilde;"),
	('ç', "&ccedil;"),
	('Á', "&Aacute;"),
	('À', "&Agrave;"),
	('Â', "&Acirc;"),
	('Ä', "&Auml;"),
	('Ã', "&Atilde;"),
	('Å', "&Aring;"),
	('É', "&Eacute;"),
	('È', "&Egrave;"),
	('Ê', "&Ecirc;"),
	('Ë', "&Euml;"),
	('Í', "&Iacute;"),
	('Ì', "&Igrave;"),
	('Î', "&Icirc;"),
	('Ï', "&Iuml;"),
	('Ó', "&Oacute;"),
	('Ò', "&Ograve;"),
	('Ô', "&Ocirc;"),
	('Ö', "&Ouml;"),
	('Õ', "&Otilde;"),
	('Ú', "&Uacute;"),
	('Ù', "&Ugrave;"),
	('Û', "&Ucirc;"),
	('Ü', "&Uuml;"),
	('Ý', "&Yacute;"),
	('Ÿ', "&Yuml;"),
	('Ñ', "&Ntilde;"),
	('Ç', "&Ccedil;"),
];

/// Replace accented characters with their named entities, e.g. `Mattheüs`
/// becomes `Matthe&uuml;s`. Everything else is left alone.
pub fn html_encode(input: &str) -> String {
	HTML_ENTITIES
		.iter()
		.fold(input.to_string(), |text, (character, entity)| {
			if text.contains(*character) {
				text.replace(*character, entity)
			} else {
				text
			}
		})
}
