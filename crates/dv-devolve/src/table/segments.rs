//! Static UTF-8 translation data, one array per segment.
//!
//! `None` leaves the code point untranslated; it then shows up as a
//! `*U+xxxx=...*` escape. `Some("")` drops the code point.

use super::Segment;

/// Every segment, ascending by start code point.
pub(super) const SEGMENTS: &[Segment] = &[
    Segment::new(0x00A0, &LATIN1_SUPPLEMENT),
    Segment::new(0x0100, &LATIN_EXTENDED_A),
    Segment::new(0x0180, &LATIN_EXTENDED_B),
    Segment::new(0x02B9, &SPACING_MODIFIERS),
    Segment::new(0x2000, &GENERAL_PUNCTUATION),
    Segment::new(0x20A0, &CURRENCY_SYMBOLS),
    Segment::new(0x2100, &LETTERLIKE_SYMBOLS),
    Segment::new(0x2150, &NUMBER_FORMS),
    Segment::new(0x2190, &ARROWS),
    Segment::new(0x21D0, &DOUBLE_ARROWS),
    Segment::new(0x2212, &MATH_OPERATORS),
    Segment::new(0x2236, &MATH_TILDES),
    Segment::new(0x2260, &MATH_RELATIONS),
    Segment::new(0x2500, &BOX_DRAWING),
    Segment::new(0x2580, &BLOCK_ELEMENTS),
    Segment::new(0xFB00, &ALPHABETIC_PRESENTATION),
    Segment::new(0xFEFF, &BYTE_ORDER_MARK),
    Segment::new(0xFF01, &FULLWIDTH_ASCII),
];

/// U+00A0..=U+00FF.
/// Latin-1 Supplement.
///
/// Same replacements as the Latin-1 byte table, except the soft hyphen
/// which stays untranslated unless the soft-hyphen override is on.
const LATIN1_SUPPLEMENT: [Option<&str>; 96] = [
    Some("\\[nbsp]"), // U+00A0 no-break space
    Some("!"), // U+00A1 ¡
    Some("\\[cents]"), // U+00A2 ¢
    Some("\\[GBP]"), // U+00A3 £
    Some("\\[lozenge]"), // U+00A4 ¤
    Some("\\[Yen]"), // U+00A5 ¥
    Some("|"), // U+00A6 ¦
    Some("\\[section]"), // U+00A7 §
    Some("\\[umlaut]"), // U+00A8 ¨
    Some("(C)"), // U+00A9 ©
    Some("a"), // U+00AA ª
    Some("<<"), // U+00AB «
    Some("\\[not]"), // U+00AC ¬
    None, // U+00AD soft hyphen
    Some("(R)"), // U+00AE ®
    Some("\\[macron]"), // U+00AF ¯
    Some("\\[degree]"), // U+00B0 °
    Some("\\[+-]"), // U+00B1 ±
    Some("2"), // U+00B2 ²
    Some("3"), // U+00B3 ³
    Some("'"), // U+00B4 ´
    Some("u"), // U+00B5 µ
    Some("\\[paragraph]"), // U+00B6 ¶
    Some("."), // U+00B7 ·
    Some(","), // U+00B8 ¸
    Some("1"), // U+00B9 ¹
    Some("o"), // U+00BA º
    Some(">>"), // U+00BB »
    Some("1/4"), // U+00BC ¼
    Some("1/2"), // U+00BD ½
    Some("3/4"), // U+00BE ¾
    Some("?"), // U+00BF ¿
    Some("A"), // U+00C0 À
    Some("A"), // U+00C1 Á
    Some("A"), // U+00C2 Â
    Some("A"), // U+00C3 Ã
    Some("A"), // U+00C4 Ä
    Some("A"), // U+00C5 Å
    Some("AE"), // U+00C6 Æ
    Some("C"), // U+00C7 Ç
    Some("E"), // U+00C8 È
    Some("E"), // U+00C9 É
    Some("E"), // U+00CA Ê
    Some("E"), // U+00CB Ë
    Some("I"), // U+00CC Ì
    Some("I"), // U+00CD Í
    Some("I"), // U+00CE Î
    Some("I"), // U+00CF Ï
    Some("D"), // U+00D0 Ð
    Some("N"), // U+00D1 Ñ
    Some("O"), // U+00D2 Ò
    Some("O"), // U+00D3 Ó
    Some("O"), // U+00D4 Ô
    Some("O"), // U+00D5 Õ
    Some("O"), // U+00D6 Ö
    Some("x"), // U+00D7 ×
    Some("O"), // U+00D8 Ø
    Some("U"), // U+00D9 Ù
    Some("U"), // U+00DA Ú
    Some("U"), // U+00DB Û
    Some("U"), // U+00DC Ü
    Some("Y"), // U+00DD Ý
    Some("P"), // U+00DE Þ
    Some("B"), // U+00DF ß
    Some("a"), // U+00E0 à
    Some("a"), // U+00E1 á
    Some("a"), // U+00E2 â
    Some("a"), // U+00E3 ã
    Some("a"), // U+00E4 ä
    Some("a"), // U+00E5 å
    Some("ae"), // U+00E6 æ
    Some("c"), // U+00E7 ç
    Some("e"), // U+00E8 è
    Some("e"), // U+00E9 é
    Some("e"), // U+00EA ê
    Some("e"), // U+00EB ë
    Some("i"), // U+00EC ì
    Some("i"), // U+00ED í
    Some("i"), // U+00EE î
    Some("i"), // U+00EF ï
    Some("o"), // U+00F0 ð
    Some("n"), // U+00F1 ñ
    Some("o"), // U+00F2 ò
    Some("o"), // U+00F3 ó
    Some("o"), // U+00F4 ô
    Some("o"), // U+00F5 õ
    Some("o"), // U+00F6 ö
    Some("/"), // U+00F7 ÷
    Some("o"), // U+00F8 ø
    Some("u"), // U+00F9 ù
    Some("u"), // U+00FA ú
    Some("u"), // U+00FB û
    Some("u"), // U+00FC ü
    Some("y"), // U+00FD ý
    Some("p"), // U+00FE þ
    Some("y"), // U+00FF ÿ
];

/// U+0100..=U+017F.
/// Latin Extended-A.
const LATIN_EXTENDED_A: [Option<&str>; 128] = [
    Some("A"), // U+0100 Ā
    Some("a"), // U+0101 ā
    Some("A"), // U+0102 Ă
    Some("a"), // U+0103 ă
    Some("A"), // U+0104 Ą
    Some("a"), // U+0105 ą
    Some("C"), // U+0106 Ć
    Some("c"), // U+0107 ć
    Some("C"), // U+0108 Ĉ
    Some("c"), // U+0109 ĉ
    Some("C"), // U+010A Ċ
    Some("c"), // U+010B ċ
    Some("C"), // U+010C Č
    Some("c"), // U+010D č
    Some("D"), // U+010E Ď
    Some("d"), // U+010F ď
    Some("D"), // U+0110 Đ
    Some("d"), // U+0111 đ
    Some("E"), // U+0112 Ē
    Some("e"), // U+0113 ē
    Some("E"), // U+0114 Ĕ
    Some("e"), // U+0115 ĕ
    Some("E"), // U+0116 Ė
    Some("e"), // U+0117 ė
    Some("E"), // U+0118 Ę
    Some("e"), // U+0119 ę
    Some("E"), // U+011A Ě
    Some("e"), // U+011B ě
    Some("G"), // U+011C Ĝ
    Some("g"), // U+011D ĝ
    Some("G"), // U+011E Ğ
    Some("g"), // U+011F ğ
    Some("G"), // U+0120 Ġ
    Some("g"), // U+0121 ġ
    Some("G"), // U+0122 Ģ
    Some("g"), // U+0123 ģ
    Some("H"), // U+0124 Ĥ
    Some("h"), // U+0125 ĥ
    Some("H"), // U+0126 Ħ
    Some("h"), // U+0127 ħ
    Some("I"), // U+0128 Ĩ
    Some("i"), // U+0129 ĩ
    Some("I"), // U+012A Ī
    Some("i"), // U+012B ī
    Some("I"), // U+012C Ĭ
    Some("i"), // U+012D ĭ
    Some("I"), // U+012E Į
    Some("i"), // U+012F į
    Some("I"), // U+0130 İ
    Some("i"), // U+0131 ı
    Some("IJ"), // U+0132 Ĳ
    Some("ij"), // U+0133 ĳ
    Some("J"), // U+0134 Ĵ
    Some("j"), // U+0135 ĵ
    Some("K"), // U+0136 Ķ
    Some("k"), // U+0137 ķ
    Some("k"), // U+0138 ĸ
    Some("L"), // U+0139 Ĺ
    Some("l"), // U+013A ĺ
    Some("L"), // U+013B Ļ
    Some("l"), // U+013C ļ
    Some("L"), // U+013D Ľ
    Some("l"), // U+013E ľ
    Some("L"), // U+013F Ŀ
    Some("l"), // U+0140 ŀ
    Some("L"), // U+0141 Ł
    Some("l"), // U+0142 ł
    Some("N"), // U+0143 Ń
    Some("n"), // U+0144 ń
    Some("N"), // U+0145 Ņ
    Some("n"), // U+0146 ņ
    Some("N"), // U+0147 Ň
    Some("n"), // U+0148 ň
    Some("'n"), // U+0149 ŉ
    Some("N"), // U+014A Ŋ
    Some("n"), // U+014B ŋ
    Some("O"), // U+014C Ō
    Some("o"), // U+014D ō
    Some("O"), // U+014E Ŏ
    Some("o"), // U+014F ŏ
    Some("O"), // U+0150 Ő
    Some("o"), // U+0151 ő
    Some("OE"), // U+0152 Œ
    Some("oe"), // U+0153 œ
    Some("R"), // U+0154 Ŕ
    Some("r"), // U+0155 ŕ
    Some("R"), // U+0156 Ŗ
    Some("r"), // U+0157 ŗ
    Some("R"), // U+0158 Ř
    Some("r"), // U+0159 ř
    Some("S"), // U+015A Ś
    Some("s"), // U+015B ś
    Some("S"), // U+015C Ŝ
    Some("s"), // U+015D ŝ
    Some("S"), // U+015E Ş
    Some("s"), // U+015F ş
    Some("S"), // U+0160 Š
    Some("s"), // U+0161 š
    Some("T"), // U+0162 Ţ
    Some("t"), // U+0163 ţ
    Some("T"), // U+0164 Ť
    Some("t"), // U+0165 ť
    Some("T"), // U+0166 Ŧ
    Some("t"), // U+0167 ŧ
    Some("U"), // U+0168 Ũ
    Some("u"), // U+0169 ũ
    Some("U"), // U+016A Ū
    Some("u"), // U+016B ū
    Some("U"), // U+016C Ŭ
    Some("u"), // U+016D ŭ
    Some("U"), // U+016E Ů
    Some("u"), // U+016F ů
    Some("U"), // U+0170 Ű
    Some("u"), // U+0171 ű
    Some("U"), // U+0172 Ų
    Some("u"), // U+0173 ų
    Some("W"), // U+0174 Ŵ
    Some("w"), // U+0175 ŵ
    Some("Y"), // U+0176 Ŷ
    Some("y"), // U+0177 ŷ
    Some("Y"), // U+0178 Ÿ
    Some("Z"), // U+0179 Ź
    Some("z"), // U+017A ź
    Some("Z"), // U+017B Ż
    Some("z"), // U+017C ż
    Some("Z"), // U+017D Ž
    Some("z"), // U+017E ž
    Some("s"), // U+017F ſ
];

/// U+0180..=U+024F.
/// Latin Extended-B. Letters without an obvious ASCII base stay
/// untranslated.
const LATIN_EXTENDED_B: [Option<&str>; 208] = [
    Some("b"), // U+0180 ƀ
    Some("B"), // U+0181 Ɓ
    Some("B"), // U+0182 Ƃ
    Some("b"), // U+0183 ƃ
    None, // U+0184 Ƅ
    None, // U+0185 ƅ
    Some("O"), // U+0186 Ɔ
    Some("C"), // U+0187 Ƈ
    Some("c"), // U+0188 ƈ
    Some("D"), // U+0189 Ɖ
    Some("D"), // U+018A Ɗ
    Some("D"), // U+018B Ƌ
    Some("d"), // U+018C ƌ
    None, // U+018D ƍ
    Some("E"), // U+018E Ǝ
    None, // U+018F Ə
    Some("E"), // U+0190 Ɛ
    Some("F"), // U+0191 Ƒ
    Some("f"), // U+0192 ƒ
    Some("G"), // U+0193 Ɠ
    None, // U+0194 Ɣ
    None, // U+0195 ƕ
    Some("I"), // U+0196 Ɩ
    Some("I"), // U+0197 Ɨ
    Some("K"), // U+0198 Ƙ
    Some("k"), // U+0199 ƙ
    Some("l"), // U+019A ƚ
    None, // U+019B ƛ
    None, // U+019C Ɯ
    Some("N"), // U+019D Ɲ
    Some("n"), // U+019E ƞ
    Some("O"), // U+019F Ɵ
    Some("O"), // U+01A0 Ơ
    Some("o"), // U+01A1 ơ
    None, // U+01A2 Ƣ
    None, // U+01A3 ƣ
    Some("P"), // U+01A4 Ƥ
    Some("p"), // U+01A5 ƥ
    None, // U+01A6 Ʀ
    None, // U+01A7 Ƨ
    None, // U+01A8 ƨ
    None, // U+01A9 Ʃ
    None, // U+01AA ƪ
    Some("t"), // U+01AB ƫ
    Some("T"), // U+01AC Ƭ
    Some("t"), // U+01AD ƭ
    Some("T"), // U+01AE Ʈ
    Some("U"), // U+01AF Ư
    Some("u"), // U+01B0 ư
    None, // U+01B1 Ʊ
    Some("V"), // U+01B2 Ʋ
    Some("Y"), // U+01B3 Ƴ
    Some("y"), // U+01B4 ƴ
    Some("Z"), // U+01B5 Ƶ
    Some("z"), // U+01B6 ƶ
    None, // U+01B7 Ʒ
    None, // U+01B8 Ƹ
    None, // U+01B9 ƹ
    None, // U+01BA ƺ
    None, // U+01BB ƻ
    None, // U+01BC Ƽ
    None, // U+01BD ƽ
    None, // U+01BE ƾ
    None, // U+01BF ƿ
    None, // U+01C0 ǀ
    None, // U+01C1 ǁ
    None, // U+01C2 ǂ
    None, // U+01C3 ǃ
    Some("DZ"), // U+01C4 Ǆ
    Some("Dz"), // U+01C5 ǅ
    Some("dz"), // U+01C6 ǆ
    Some("LJ"), // U+01C7 Ǉ
    Some("Lj"), // U+01C8 ǈ
    Some("lj"), // U+01C9 ǉ
    Some("NJ"), // U+01CA Ǌ
    Some("Nj"), // U+01CB ǋ
    Some("nj"), // U+01CC ǌ
    Some("A"), // U+01CD Ǎ
    Some("a"), // U+01CE ǎ
    Some("I"), // U+01CF Ǐ
    Some("i"), // U+01D0 ǐ
    Some("O"), // U+01D1 Ǒ
    Some("o"), // U+01D2 ǒ
    Some("U"), // U+01D3 Ǔ
    Some("u"), // U+01D4 ǔ
    Some("U"), // U+01D5 Ǖ
    Some("u"), // U+01D6 ǖ
    Some("U"), // U+01D7 Ǘ
    Some("u"), // U+01D8 ǘ
    Some("U"), // U+01D9 Ǚ
    Some("u"), // U+01DA ǚ
    Some("U"), // U+01DB Ǜ
    Some("u"), // U+01DC ǜ
    None, // U+01DD ǝ
    Some("A"), // U+01DE Ǟ
    Some("a"), // U+01DF ǟ
    Some("A"), // U+01E0 Ǡ
    Some("a"), // U+01E1 ǡ
    Some("AE"), // U+01E2 Ǣ
    Some("ae"), // U+01E3 ǣ
    Some("G"), // U+01E4 Ǥ
    Some("g"), // U+01E5 ǥ
    Some("G"), // U+01E6 Ǧ
    Some("g"), // U+01E7 ǧ
    Some("K"), // U+01E8 Ǩ
    Some("k"), // U+01E9 ǩ
    Some("O"), // U+01EA Ǫ
    Some("o"), // U+01EB ǫ
    Some("O"), // U+01EC Ǭ
    Some("o"), // U+01ED ǭ
    None, // U+01EE Ǯ
    None, // U+01EF ǯ
    Some("j"), // U+01F0 ǰ
    Some("DZ"), // U+01F1 Ǳ
    Some("Dz"), // U+01F2 ǲ
    Some("dz"), // U+01F3 ǳ
    Some("G"), // U+01F4 Ǵ
    Some("g"), // U+01F5 ǵ
    None, // U+01F6 Ƕ
    None, // U+01F7 Ƿ
    Some("N"), // U+01F8 Ǹ
    Some("n"), // U+01F9 ǹ
    Some("A"), // U+01FA Ǻ
    Some("a"), // U+01FB ǻ
    Some("AE"), // U+01FC Ǽ
    Some("ae"), // U+01FD ǽ
    Some("O"), // U+01FE Ǿ
    Some("o"), // U+01FF ǿ
    Some("A"), // U+0200 Ȁ
    Some("a"), // U+0201 ȁ
    Some("A"), // U+0202 Ȃ
    Some("a"), // U+0203 ȃ
    Some("E"), // U+0204 Ȅ
    Some("e"), // U+0205 ȅ
    Some("E"), // U+0206 Ȇ
    Some("e"), // U+0207 ȇ
    Some("I"), // U+0208 Ȉ
    Some("i"), // U+0209 ȉ
    Some("I"), // U+020A Ȋ
    Some("i"), // U+020B ȋ
    Some("O"), // U+020C Ȍ
    Some("o"), // U+020D ȍ
    Some("O"), // U+020E Ȏ
    Some("o"), // U+020F ȏ
    Some("R"), // U+0210 Ȑ
    Some("r"), // U+0211 ȑ
    Some("R"), // U+0212 Ȓ
    Some("r"), // U+0213 ȓ
    Some("U"), // U+0214 Ȕ
    Some("u"), // U+0215 ȕ
    Some("U"), // U+0216 Ȗ
    Some("u"), // U+0217 ȗ
    Some("S"), // U+0218 Ș
    Some("s"), // U+0219 ș
    Some("T"), // U+021A Ț
    Some("t"), // U+021B ț
    None, // U+021C Ȝ
    None, // U+021D ȝ
    Some("H"), // U+021E Ȟ
    Some("h"), // U+021F ȟ
    Some("N"), // U+0220 Ƞ
    Some("d"), // U+0221 ȡ
    None, // U+0222 Ȣ
    None, // U+0223 ȣ
    Some("Z"), // U+0224 Ȥ
    Some("z"), // U+0225 ȥ
    Some("A"), // U+0226 Ȧ
    Some("a"), // U+0227 ȧ
    Some("E"), // U+0228 Ȩ
    Some("e"), // U+0229 ȩ
    Some("O"), // U+022A Ȫ
    Some("o"), // U+022B ȫ
    Some("O"), // U+022C Ȭ
    Some("o"), // U+022D ȭ
    Some("O"), // U+022E Ȯ
    Some("o"), // U+022F ȯ
    Some("O"), // U+0230 Ȱ
    Some("o"), // U+0231 ȱ
    Some("Y"), // U+0232 Ȳ
    Some("y"), // U+0233 ȳ
    Some("l"), // U+0234 ȴ
    Some("n"), // U+0235 ȵ
    Some("t"), // U+0236 ȶ
    None, // U+0237 ȷ
    None, // U+0238 ȸ
    None, // U+0239 ȹ
    Some("A"), // U+023A Ⱥ
    Some("C"), // U+023B Ȼ
    Some("c"), // U+023C ȼ
    Some("L"), // U+023D Ƚ
    Some("T"), // U+023E Ⱦ
    Some("s"), // U+023F ȿ
    Some("z"), // U+0240 ɀ
    None, // U+0241 Ɂ
    None, // U+0242 ɂ
    Some("B"), // U+0243 Ƀ
    None, // U+0244 Ʉ
    None, // U+0245 Ʌ
    Some("E"), // U+0246 Ɇ
    Some("e"), // U+0247 ɇ
    Some("J"), // U+0248 Ɉ
    Some("j"), // U+0249 ɉ
    None, // U+024A Ɋ
    Some("q"), // U+024B ɋ
    Some("R"), // U+024C Ɍ
    Some("r"), // U+024D ɍ
    Some("Y"), // U+024E Ɏ
    Some("y"), // U+024F ɏ
];

/// U+02B9..=U+02DC.
/// Spacing Modifier Letters used as quotes and accents.
const SPACING_MODIFIERS: [Option<&str>; 36] = [
    Some("'"), // U+02B9 ʹ
    Some("\""), // U+02BA ʺ
    Some("'"), // U+02BB ʻ
    Some("'"), // U+02BC ʼ
    Some("'"), // U+02BD ʽ
    None, // U+02BE ʾ
    None, // U+02BF ʿ
    None, // U+02C0 ˀ
    None, // U+02C1 ˁ
    None, // U+02C2 modifier letter left arrowhead
    None, // U+02C3 modifier letter right arrowhead
    None, // U+02C4 modifier letter up arrowhead
    None, // U+02C5 modifier letter down arrowhead
    Some("^"), // U+02C6 ˆ
    None, // U+02C7 ˇ
    Some("'"), // U+02C8 ˈ
    None, // U+02C9 ˉ
    Some("'"), // U+02CA ˊ
    Some("`"), // U+02CB ˋ
    None, // U+02CC ˌ
    Some("_"), // U+02CD ˍ
    None, // U+02CE ˎ
    None, // U+02CF ˏ
    Some(":"), // U+02D0 ː
    Some("."), // U+02D1 ˑ
    None, // U+02D2 modifier letter centred right half ring
    None, // U+02D3 modifier letter centred left half ring
    None, // U+02D4 modifier letter up tack
    None, // U+02D5 modifier letter down tack
    None, // U+02D6 modifier letter plus sign
    None, // U+02D7 modifier letter minus sign
    None, // U+02D8 breve
    None, // U+02D9 dot above
    None, // U+02DA ring above
    None, // U+02DB ogonek
    Some("~"), // U+02DC small tilde
];

/// U+2000..=U+206F.
/// General Punctuation. Zero-width and bidi controls translate to
/// nothing.
const GENERAL_PUNCTUATION: [Option<&str>; 112] = [
    Some(" "), // U+2000 en quad
    Some(" "), // U+2001 em quad
    Some(" "), // U+2002 en space
    Some(" "), // U+2003 em space
    Some(" "), // U+2004 three-per-em space
    Some(" "), // U+2005 four-per-em space
    Some(" "), // U+2006 six-per-em space
    Some(" "), // U+2007 figure space
    Some(" "), // U+2008 punctuation space
    Some(" "), // U+2009 thin space
    Some(" "), // U+200A hair space
    Some(""), // U+200B zero width space
    Some(""), // U+200C zero width non-joiner
    Some(""), // U+200D zero width joiner
    Some(""), // U+200E left-to-right mark
    Some(""), // U+200F right-to-left mark
    Some("-"), // U+2010 ‐
    Some("-"), // U+2011 ‑
    Some("-"), // U+2012 ‒
    Some("-"), // U+2013 –
    Some("--"), // U+2014 —
    Some("--"), // U+2015 ―
    Some("||"), // U+2016 ‖
    Some("_"), // U+2017 ‗
    Some("'"), // U+2018 ‘
    Some("'"), // U+2019 ’
    Some(","), // U+201A ‚
    Some("'"), // U+201B ‛
    Some("\""), // U+201C “
    Some("\""), // U+201D ”
    Some(",,"), // U+201E „
    Some("\""), // U+201F ‟
    Some("+"), // U+2020 †
    Some("++"), // U+2021 ‡
    Some("*"), // U+2022 •
    Some(">"), // U+2023 ‣
    Some("."), // U+2024 ․
    Some(".."), // U+2025 ‥
    Some("..."), // U+2026 …
    Some("-"), // U+2027 ‧
    None, // U+2028 line separator
    None, // U+2029 paragraph separator
    Some(""), // U+202A left-to-right embedding
    Some(""), // U+202B right-to-left embedding
    Some(""), // U+202C pop directional formatting
    Some(""), // U+202D left-to-right override
    Some(""), // U+202E right-to-left override
    Some(" "), // U+202F narrow no-break space
    Some("%o"), // U+2030 ‰
    Some("%oo"), // U+2031 ‱
    Some("'"), // U+2032 ′
    Some("''"), // U+2033 ″
    Some("'''"), // U+2034 ‴
    Some("`"), // U+2035 ‵
    Some("``"), // U+2036 ‶
    Some("```"), // U+2037 ‷
    Some("^"), // U+2038 ‸
    Some("<"), // U+2039 ‹
    Some(">"), // U+203A ›
    Some("*"), // U+203B ※
    Some("!!"), // U+203C ‼
    Some("?!"), // U+203D ‽
    Some("-"), // U+203E ‾
    None, // U+203F ‿
    None, // U+2040 ⁀
    None, // U+2041 ⁁
    None, // U+2042 ⁂
    Some("-"), // U+2043 ⁃
    Some("/"), // U+2044 ⁄
    None, // U+2045 ⁅
    None, // U+2046 ⁆
    Some("??"), // U+2047 ⁇
    Some("?!"), // U+2048 ⁈
    Some("!?"), // U+2049 ⁉
    None, // U+204A ⁊
    None, // U+204B ⁋
    None, // U+204C ⁌
    None, // U+204D ⁍
    Some("*"), // U+204E ⁎
    None, // U+204F ⁏
    None, // U+2050 ⁐
    None, // U+2051 ⁑
    Some("%"), // U+2052 ⁒
    Some("~"), // U+2053 ⁓
    None, // U+2054 ⁔
    None, // U+2055 ⁕
    None, // U+2056 ⁖
    None, // U+2057 ⁗
    None, // U+2058 ⁘
    None, // U+2059 ⁙
    None, // U+205A ⁚
    None, // U+205B ⁛
    None, // U+205C ⁜
    None, // U+205D ⁝
    None, // U+205E ⁞
    Some(" "), // U+205F medium mathematical space
    Some(""), // U+2060 word joiner
    Some(""), // U+2061 function application
    Some(""), // U+2062 invisible times
    Some(""), // U+2063 invisible separator
    Some(""), // U+2064 invisible plus
    None, // U+2065 
    None, // U+2066 left-to-right isolate
    None, // U+2067 right-to-left isolate
    None, // U+2068 first strong isolate
    None, // U+2069 pop directional isolate
    None, // U+206A inhibit symmetric swapping
    None, // U+206B activate symmetric swapping
    None, // U+206C inhibit arabic form shaping
    None, // U+206D activate arabic form shaping
    None, // U+206E national digit shapes
    None, // U+206F nominal digit shapes
];

/// U+20A0..=U+20BF.
/// Currency Symbols.
const CURRENCY_SYMBOLS: [Option<&str>; 32] = [
    None, // U+20A0 ₠
    Some("C"), // U+20A1 ₡
    None, // U+20A2 ₢
    Some("Fr"), // U+20A3 ₣
    Some("L"), // U+20A4 ₤
    None, // U+20A5 ₥
    Some("N"), // U+20A6 ₦
    Some("Pts"), // U+20A7 ₧
    Some("Rs"), // U+20A8 ₨
    Some("W"), // U+20A9 ₩
    Some("NS"), // U+20AA ₪
    Some("d"), // U+20AB ₫
    Some("EUR"), // U+20AC €
    Some("K"), // U+20AD ₭
    Some("T"), // U+20AE ₮
    None, // U+20AF ₯
    None, // U+20B0 ₰
    Some("P"), // U+20B1 ₱
    None, // U+20B2 ₲
    None, // U+20B3 ₳
    Some("UAH"), // U+20B4 ₴
    None, // U+20B5 ₵
    None, // U+20B6 ₶
    None, // U+20B7 ₷
    None, // U+20B8 ₸
    Some("Rs"), // U+20B9 ₹
    Some("TL"), // U+20BA ₺
    None, // U+20BB ₻
    None, // U+20BC ₼
    Some("RUB"), // U+20BD ₽
    None, // U+20BE ₾
    Some("BTC"), // U+20BF ₿
];

/// U+2100..=U+214F.
/// Letterlike Symbols.
const LETTERLIKE_SYMBOLS: [Option<&str>; 80] = [
    Some("a/c"), // U+2100 ℀
    Some("a/s"), // U+2101 ℁
    Some("C"), // U+2102 ℂ
    Some("oC"), // U+2103 ℃
    None, // U+2104 ℄
    Some("c/o"), // U+2105 ℅
    Some("c/u"), // U+2106 ℆
    None, // U+2107 ℇ
    None, // U+2108 ℈
    Some("oF"), // U+2109 ℉
    Some("g"), // U+210A ℊ
    Some("H"), // U+210B ℋ
    Some("H"), // U+210C ℌ
    Some("H"), // U+210D ℍ
    Some("h"), // U+210E ℎ
    None, // U+210F ℏ
    Some("I"), // U+2110 ℐ
    Some("I"), // U+2111 ℑ
    Some("L"), // U+2112 ℒ
    Some("l"), // U+2113 ℓ
    None, // U+2114 ℔
    Some("N"), // U+2115 ℕ
    Some("No"), // U+2116 №
    Some("(P)"), // U+2117 ℗
    None, // U+2118 ℘
    Some("P"), // U+2119 ℙ
    Some("Q"), // U+211A ℚ
    Some("R"), // U+211B ℛ
    Some("R"), // U+211C ℜ
    Some("R"), // U+211D ℝ
    None, // U+211E ℞
    None, // U+211F ℟
    Some("SM"), // U+2120 ℠
    Some("TEL"), // U+2121 ℡
    Some("TM"), // U+2122 ™
    None, // U+2123 ℣
    Some("Z"), // U+2124 ℤ
    None, // U+2125 ℥
    Some("Ohm"), // U+2126 Ω
    None, // U+2127 ℧
    Some("Z"), // U+2128 ℨ
    None, // U+2129 ℩
    Some("K"), // U+212A K
    Some("A"), // U+212B Å
    Some("B"), // U+212C ℬ
    Some("C"), // U+212D ℭ
    Some("e"), // U+212E ℮
    Some("e"), // U+212F ℯ
    Some("E"), // U+2130 ℰ
    Some("F"), // U+2131 ℱ
    None, // U+2132 Ⅎ
    Some("M"), // U+2133 ℳ
    Some("o"), // U+2134 ℴ
    None, // U+2135 ℵ
    None, // U+2136 ℶ
    None, // U+2137 ℷ
    None, // U+2138 ℸ
    Some("i"), // U+2139 ℹ
    None, // U+213A ℺
    Some("FAX"), // U+213B ℻
    None, // U+213C ℼ
    None, // U+213D ℽ
    None, // U+213E ℾ
    None, // U+213F ℿ
    None, // U+2140 ⅀
    None, // U+2141 ⅁
    None, // U+2142 ⅂
    None, // U+2143 ⅃
    None, // U+2144 ⅄
    Some("D"), // U+2145 ⅅ
    Some("d"), // U+2146 ⅆ
    Some("e"), // U+2147 ⅇ
    Some("i"), // U+2148 ⅈ
    Some("j"), // U+2149 ⅉ
    None, // U+214A ⅊
    None, // U+214B ⅋
    None, // U+214C ⅌
    None, // U+214D ⅍
    None, // U+214E ⅎ
    None, // U+214F ⅏
];

/// U+2150..=U+218B.
/// Number Forms: vulgar fractions and roman numerals.
const NUMBER_FORMS: [Option<&str>; 60] = [
    Some("1/7"), // U+2150 ⅐
    Some("1/9"), // U+2151 ⅑
    Some("1/10"), // U+2152 ⅒
    Some("1/3"), // U+2153 ⅓
    Some("2/3"), // U+2154 ⅔
    Some("1/5"), // U+2155 ⅕
    Some("2/5"), // U+2156 ⅖
    Some("3/5"), // U+2157 ⅗
    Some("4/5"), // U+2158 ⅘
    Some("1/6"), // U+2159 ⅙
    Some("5/6"), // U+215A ⅚
    Some("1/8"), // U+215B ⅛
    Some("3/8"), // U+215C ⅜
    Some("5/8"), // U+215D ⅝
    Some("7/8"), // U+215E ⅞
    Some("1/"), // U+215F ⅟
    Some("I"), // U+2160 Ⅰ
    Some("II"), // U+2161 Ⅱ
    Some("III"), // U+2162 Ⅲ
    Some("IV"), // U+2163 Ⅳ
    Some("V"), // U+2164 Ⅴ
    Some("VI"), // U+2165 Ⅵ
    Some("VII"), // U+2166 Ⅶ
    Some("VIII"), // U+2167 Ⅷ
    Some("IX"), // U+2168 Ⅸ
    Some("X"), // U+2169 Ⅹ
    Some("XI"), // U+216A Ⅺ
    Some("XII"), // U+216B Ⅻ
    Some("L"), // U+216C Ⅼ
    Some("C"), // U+216D Ⅽ
    Some("D"), // U+216E Ⅾ
    Some("M"), // U+216F Ⅿ
    Some("i"), // U+2170 ⅰ
    Some("ii"), // U+2171 ⅱ
    Some("iii"), // U+2172 ⅲ
    Some("iv"), // U+2173 ⅳ
    Some("v"), // U+2174 ⅴ
    Some("vi"), // U+2175 ⅵ
    Some("vii"), // U+2176 ⅶ
    Some("viii"), // U+2177 ⅷ
    Some("ix"), // U+2178 ⅸ
    Some("x"), // U+2179 ⅹ
    Some("xi"), // U+217A ⅺ
    Some("xii"), // U+217B ⅻ
    Some("l"), // U+217C ⅼ
    Some("c"), // U+217D ⅽ
    Some("d"), // U+217E ⅾ
    Some("m"), // U+217F ⅿ
    None, // U+2180 ↀ
    None, // U+2181 ↁ
    None, // U+2182 ↂ
    None, // U+2183 Ↄ
    None, // U+2184 ↄ
    None, // U+2185 ↅ
    None, // U+2186 ↆ
    None, // U+2187 ↇ
    None, // U+2188 ↈ
    Some("0/3"), // U+2189 ↉
    None, // U+218A ↊
    None, // U+218B ↋
];

/// U+2190..=U+2195.
/// Simple arrows.
const ARROWS: [Option<&str>; 6] = [
    Some("<-"), // U+2190 ←
    Some("^"), // U+2191 ↑
    Some("->"), // U+2192 →
    Some("v"), // U+2193 ↓
    Some("<->"), // U+2194 ↔
    Some("^v"), // U+2195 ↕
];

/// U+21D0..=U+21D4.
/// Double arrows.
const DOUBLE_ARROWS: [Option<&str>; 5] = [
    Some("<="), // U+21D0 ⇐
    None, // U+21D1 ⇑
    Some("=>"), // U+21D2 ⇒
    None, // U+21D3 ⇓
    Some("<=>"), // U+21D4 ⇔
];

/// U+2212..=U+2225.
/// Mathematical operators commonly found in prose.
const MATH_OPERATORS: [Option<&str>; 20] = [
    Some("-"), // U+2212 −
    Some("-+"), // U+2213 ∓
    None, // U+2214 ∔
    Some("/"), // U+2215 ∕
    Some("\\"), // U+2216 ∖
    Some("*"), // U+2217 ∗
    Some("o"), // U+2218 ∘
    Some("."), // U+2219 ∙
    Some("sqrt"), // U+221A √
    None, // U+221B ∛
    None, // U+221C ∜
    None, // U+221D ∝
    Some("inf"), // U+221E ∞
    None, // U+221F ∟
    None, // U+2220 ∠
    None, // U+2221 ∡
    None, // U+2222 ∢
    Some("|"), // U+2223 ∣
    None, // U+2224 ∤
    Some("||"), // U+2225 ∥
];

/// U+2236..=U+2248.
/// Ratio and tilde operators.
const MATH_TILDES: [Option<&str>; 19] = [
    Some(":"), // U+2236 ∶
    None, // U+2237 ∷
    None, // U+2238 ∸
    None, // U+2239 ∹
    None, // U+223A ∺
    None, // U+223B ∻
    Some("~"), // U+223C ∼
    None, // U+223D ∽
    None, // U+223E ∾
    None, // U+223F ∿
    None, // U+2240 ≀
    None, // U+2241 ≁
    None, // U+2242 ≂
    None, // U+2243 ≃
    None, // U+2244 ≄
    None, // U+2245 ≅
    None, // U+2246 ≆
    None, // U+2247 ≇
    Some("~="), // U+2248 ≈
];

/// U+2260..=U+2265.
/// Equality and ordering relations.
const MATH_RELATIONS: [Option<&str>; 6] = [
    Some("!="), // U+2260 ≠
    Some("=="), // U+2261 ≡
    None, // U+2262 ≢
    None, // U+2263 ≣
    Some("<="), // U+2264 ≤
    Some(">="), // U+2265 ≥
];

/// U+2500..=U+257F.
/// Box Drawing, reduced to '-', '|', '=' and '+'.
const BOX_DRAWING: [Option<&str>; 128] = [
    Some("-"), // U+2500 ─
    Some("-"), // U+2501 ━
    Some("|"), // U+2502 │
    Some("|"), // U+2503 ┃
    Some("-"), // U+2504 ┄
    Some("-"), // U+2505 ┅
    Some("|"), // U+2506 ┆
    Some("|"), // U+2507 ┇
    Some("-"), // U+2508 ┈
    Some("-"), // U+2509 ┉
    Some("|"), // U+250A ┊
    Some("|"), // U+250B ┋
    Some("+"), // U+250C ┌
    Some("+"), // U+250D ┍
    Some("+"), // U+250E ┎
    Some("+"), // U+250F ┏
    Some("+"), // U+2510 ┐
    Some("+"), // U+2511 ┑
    Some("+"), // U+2512 ┒
    Some("+"), // U+2513 ┓
    Some("+"), // U+2514 └
    Some("+"), // U+2515 ┕
    Some("+"), // U+2516 ┖
    Some("+"), // U+2517 ┗
    Some("+"), // U+2518 ┘
    Some("+"), // U+2519 ┙
    Some("+"), // U+251A ┚
    Some("+"), // U+251B ┛
    Some("+"), // U+251C ├
    Some("+"), // U+251D ┝
    Some("+"), // U+251E ┞
    Some("+"), // U+251F ┟
    Some("+"), // U+2520 ┠
    Some("+"), // U+2521 ┡
    Some("+"), // U+2522 ┢
    Some("+"), // U+2523 ┣
    Some("+"), // U+2524 ┤
    Some("+"), // U+2525 ┥
    Some("+"), // U+2526 ┦
    Some("+"), // U+2527 ┧
    Some("+"), // U+2528 ┨
    Some("+"), // U+2529 ┩
    Some("+"), // U+252A ┪
    Some("+"), // U+252B ┫
    Some("+"), // U+252C ┬
    Some("+"), // U+252D ┭
    Some("+"), // U+252E ┮
    Some("+"), // U+252F ┯
    Some("+"), // U+2530 ┰
    Some("+"), // U+2531 ┱
    Some("+"), // U+2532 ┲
    Some("+"), // U+2533 ┳
    Some("+"), // U+2534 ┴
    Some("+"), // U+2535 ┵
    Some("+"), // U+2536 ┶
    Some("+"), // U+2537 ┷
    Some("+"), // U+2538 ┸
    Some("+"), // U+2539 ┹
    Some("+"), // U+253A ┺
    Some("+"), // U+253B ┻
    Some("+"), // U+253C ┼
    Some("-"), // U+253D ┽
    Some("-"), // U+253E ┾
    Some("+"), // U+253F ┿
    Some("-"), // U+2540 ╀
    Some("-"), // U+2541 ╁
    Some("+"), // U+2542 ╂
    Some("+"), // U+2543 ╃
    Some("+"), // U+2544 ╄
    Some("+"), // U+2545 ╅
    Some("+"), // U+2546 ╆
    Some("-"), // U+2547 ╇
    Some("-"), // U+2548 ╈
    Some("-"), // U+2549 ╉
    Some("-"), // U+254A ╊
    Some("+"), // U+254B ╋
    Some("="), // U+254C ╌
    Some("="), // U+254D ╍
    Some("|"), // U+254E ╎
    Some("|"), // U+254F ╏
    Some("="), // U+2550 ═
    Some("|"), // U+2551 ║
    Some("+"), // U+2552 ╒
    Some("+"), // U+2553 ╓
    Some("+"), // U+2554 ╔
    Some("+"), // U+2555 ╕
    Some("+"), // U+2556 ╖
    Some("+"), // U+2557 ╗
    Some("+"), // U+2558 ╘
    Some("+"), // U+2559 ╙
    Some("+"), // U+255A ╚
    Some("+"), // U+255B ╛
    Some("+"), // U+255C ╜
    Some("+"), // U+255D ╝
    Some("+"), // U+255E ╞
    Some("+"), // U+255F ╟
    Some("+"), // U+2560 ╠
    Some("+"), // U+2561 ╡
    Some("+"), // U+2562 ╢
    Some("+"), // U+2563 ╣
    Some("+"), // U+2564 ╤
    Some("+"), // U+2565 ╥
    Some("+"), // U+2566 ╦
    Some("+"), // U+2567 ╧
    Some("+"), // U+2568 ╨
    Some("+"), // U+2569 ╩
    Some("+"), // U+256A ╪
    Some("+"), // U+256B ╫
    Some("+"), // U+256C ╬
    Some("+"), // U+256D ╭
    Some("+"), // U+256E ╮
    Some("+"), // U+256F ╯
    Some("+"), // U+2570 ╰
    Some("/"), // U+2571 ╱
    Some("\\"), // U+2572 ╲
    Some("X"), // U+2573 ╳
    Some("-"), // U+2574 ╴
    Some("|"), // U+2575 ╵
    Some("-"), // U+2576 ╶
    Some("|"), // U+2577 ╷
    Some("-"), // U+2578 ╸
    Some("|"), // U+2579 ╹
    Some("-"), // U+257A ╺
    Some("|"), // U+257B ╻
    Some("-"), // U+257C ╼
    Some("|"), // U+257D ╽
    Some("-"), // U+257E ╾
    Some("|"), // U+257F ╿
];

/// U+2580..=U+259F.
/// Block Elements.
const BLOCK_ELEMENTS: [Option<&str>; 32] = [
    Some("#"), // U+2580 ▀
    Some("_"), // U+2581 ▁
    Some("#"), // U+2582 ▂
    Some("#"), // U+2583 ▃
    Some("#"), // U+2584 ▄
    Some("#"), // U+2585 ▅
    Some("#"), // U+2586 ▆
    Some("#"), // U+2587 ▇
    Some("#"), // U+2588 █
    Some("#"), // U+2589 ▉
    Some("#"), // U+258A ▊
    Some("#"), // U+258B ▋
    Some("#"), // U+258C ▌
    Some("#"), // U+258D ▍
    Some("#"), // U+258E ▎
    Some("#"), // U+258F ▏
    Some("#"), // U+2590 ▐
    Some("."), // U+2591 ░
    Some(":"), // U+2592 ▒
    Some("#"), // U+2593 ▓
    Some("#"), // U+2594 ▔
    Some("#"), // U+2595 ▕
    Some("#"), // U+2596 ▖
    Some("#"), // U+2597 ▗
    Some("#"), // U+2598 ▘
    Some("#"), // U+2599 ▙
    Some("#"), // U+259A ▚
    Some("#"), // U+259B ▛
    Some("#"), // U+259C ▜
    Some("#"), // U+259D ▝
    Some("#"), // U+259E ▞
    Some("#"), // U+259F ▟
];

/// U+FB00..=U+FB06.
/// Latin ligatures from Alphabetic Presentation Forms.
const ALPHABETIC_PRESENTATION: [Option<&str>; 7] = [
    Some("ff"), // U+FB00 ﬀ
    Some("fi"), // U+FB01 ﬁ
    Some("fl"), // U+FB02 ﬂ
    Some("ffi"), // U+FB03 ﬃ
    Some("ffl"), // U+FB04 ﬄ
    Some("st"), // U+FB05 ﬅ
    Some("st"), // U+FB06 ﬆ
];

/// U+FEFF..=U+FEFF.
/// Zero width no-break space (byte order mark).
const BYTE_ORDER_MARK: [Option<&str>; 1] = [
    Some(""), // U+FEFF zero width no-break space
];

/// U+FF01..=U+FF5E.
/// Fullwidth ASCII variants.
const FULLWIDTH_ASCII: [Option<&str>; 94] = [
    Some("!"), // U+FF01 ！
    Some("\""), // U+FF02 ＂
    Some("#"), // U+FF03 ＃
    Some("$"), // U+FF04 ＄
    Some("%"), // U+FF05 ％
    Some("&"), // U+FF06 ＆
    Some("'"), // U+FF07 ＇
    Some("("), // U+FF08 （
    Some(")"), // U+FF09 ）
    Some("*"), // U+FF0A ＊
    Some("+"), // U+FF0B ＋
    Some(","), // U+FF0C ，
    Some("-"), // U+FF0D －
    Some("."), // U+FF0E ．
    Some("/"), // U+FF0F ／
    Some("0"), // U+FF10 ０
    Some("1"), // U+FF11 １
    Some("2"), // U+FF12 ２
    Some("3"), // U+FF13 ３
    Some("4"), // U+FF14 ４
    Some("5"), // U+FF15 ５
    Some("6"), // U+FF16 ６
    Some("7"), // U+FF17 ７
    Some("8"), // U+FF18 ８
    Some("9"), // U+FF19 ９
    Some(":"), // U+FF1A ：
    Some(";"), // U+FF1B ；
    Some("<"), // U+FF1C ＜
    Some("="), // U+FF1D ＝
    Some(">"), // U+FF1E ＞
    Some("?"), // U+FF1F ？
    Some("@"), // U+FF20 ＠
    Some("A"), // U+FF21 Ａ
    Some("B"), // U+FF22 Ｂ
    Some("C"), // U+FF23 Ｃ
    Some("D"), // U+FF24 Ｄ
    Some("E"), // U+FF25 Ｅ
    Some("F"), // U+FF26 Ｆ
    Some("G"), // U+FF27 Ｇ
    Some("H"), // U+FF28 Ｈ
    Some("I"), // U+FF29 Ｉ
    Some("J"), // U+FF2A Ｊ
    Some("K"), // U+FF2B Ｋ
    Some("L"), // U+FF2C Ｌ
    Some("M"), // U+FF2D Ｍ
    Some("N"), // U+FF2E Ｎ
    Some("O"), // U+FF2F Ｏ
    Some("P"), // U+FF30 Ｐ
    Some("Q"), // U+FF31 Ｑ
    Some("R"), // U+FF32 Ｒ
    Some("S"), // U+FF33 Ｓ
    Some("T"), // U+FF34 Ｔ
    Some("U"), // U+FF35 Ｕ
    Some("V"), // U+FF36 Ｖ
    Some("W"), // U+FF37 Ｗ
    Some("X"), // U+FF38 Ｘ
    Some("Y"), // U+FF39 Ｙ
    Some("Z"), // U+FF3A Ｚ
    Some("["), // U+FF3B ［
    Some("\\"), // U+FF3C ＼
    Some("]"), // U+FF3D ］
    Some("^"), // U+FF3E fullwidth circumflex accent
    Some("_"), // U+FF3F ＿
    Some("`"), // U+FF40 fullwidth grave accent
    Some("a"), // U+FF41 ａ
    Some("b"), // U+FF42 ｂ
    Some("c"), // U+FF43 ｃ
    Some("d"), // U+FF44 ｄ
    Some("e"), // U+FF45 ｅ
    Some("f"), // U+FF46 ｆ
    Some("g"), // U+FF47 ｇ
    Some("h"), // U+FF48 ｈ
    Some("i"), // U+FF49 ｉ
    Some("j"), // U+FF4A ｊ
    Some("k"), // U+FF4B ｋ
    Some("l"), // U+FF4C ｌ
    Some("m"), // U+FF4D ｍ
    Some("n"), // U+FF4E ｎ
    Some("o"), // U+FF4F ｏ
    Some("p"), // U+FF50 ｐ
    Some("q"), // U+FF51 ｑ
    Some("r"), // U+FF52 ｒ
    Some("s"), // U+FF53 ｓ
    Some("t"), // U+FF54 ｔ
    Some("u"), // U+FF55 ｕ
    Some("v"), // U+FF56 ｖ
    Some("w"), // U+FF57 ｗ
    Some("x"), // U+FF58 ｘ
    Some("y"), // U+FF59 ｙ
    Some("z"), // U+FF5A ｚ
    Some("{"), // U+FF5B ｛
    Some("|"), // U+FF5C ｜
    Some("}"), // U+FF5D ｝
    Some("~"), // U+FF5E ～
];
