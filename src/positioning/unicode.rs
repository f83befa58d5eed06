//! Unicode metadata for combining marks
//!
//! Two lookups feed the heuristic engine: the Indic positional category of
//! a mark (hand-tabulated per script, covering the nine major Indic blocks
//! plus Sinhala) and the canonical combining class (ICU data). Two-part
//! dependent vowels are tabulated under their spacing side, since the
//! engine positions a single attached glyph rather than splitting matras.

use icu_properties::{props::CanonicalCombiningClass, CodePointMapData};

/// Where a mark sits relative to its base, per Unicode positional data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicPosition {
    Top,
    Bottom,
    Left,
    Right,
}

/// Canonical combining class of a codepoint
pub fn combining_class(c: char) -> CanonicalCombiningClass {
    CodePointMapData::<CanonicalCombiningClass>::new().get(c)
}

/// Indic positional category of a mark codepoint, if tabulated
pub fn indic_position(c: char) -> Option<IndicPosition> {
    use IndicPosition::*;
    match c {
        // Devanagari
        '\u{0900}'..='\u{0902}' => Some(Top), // candrabindu, anusvara
        '\u{0903}' => Some(Right),            // visarga
        '\u{093A}' => Some(Top),              // oe
        '\u{093B}' => Some(Right),            // ooe
        '\u{093C}' => Some(Bottom),           // nukta
        '\u{093E}' => Some(Right),            // aa
        '\u{093F}' => Some(Left),             // i
        '\u{0940}' => Some(Right),            // ii
        '\u{0941}'..='\u{0944}' => Some(Bottom), // u, uu, vocalic r, vocalic rr
        '\u{0945}'..='\u{0948}' => Some(Top), // candra e, short e, e, ai
        '\u{0949}'..='\u{094C}' => Some(Right), // candra o, short o, o, au
        '\u{094D}' => Some(Bottom),           // virama
        '\u{094E}' => Some(Left),             // prishthamatra e
        '\u{094F}' => Some(Right),            // aw
        '\u{0951}' => Some(Top),              // udatta
        '\u{0952}' => Some(Bottom),           // anudatta
        '\u{0953}'..='\u{0955}' => Some(Top), // grave, acute, candra long e
        '\u{0956}'..='\u{0957}' => Some(Bottom), // ue, uue
        '\u{0962}'..='\u{0963}' => Some(Bottom), // vocalic l, vocalic ll

        // Bengali
        '\u{0981}' => Some(Top),              // candrabindu
        '\u{0982}'..='\u{0983}' => Some(Right), // anusvara, visarga
        '\u{09BC}' => Some(Bottom),           // nukta
        '\u{09BE}' => Some(Right),            // aa
        '\u{09BF}' => Some(Left),             // i
        '\u{09C0}' => Some(Right),            // ii
        '\u{09C1}'..='\u{09C4}' => Some(Bottom), // u, uu, vocalic r, vocalic rr
        '\u{09C7}'..='\u{09C8}' => Some(Left), // e, ai
        '\u{09CB}'..='\u{09CC}' => Some(Right), // o, au
        '\u{09CD}' => Some(Bottom),           // virama
        '\u{09D7}' => Some(Right),            // au length mark
        '\u{09E2}'..='\u{09E3}' => Some(Bottom), // vocalic l, vocalic ll

        // Gurmukhi
        '\u{0A01}'..='\u{0A02}' => Some(Top), // adak bindi, bindi
        '\u{0A03}' => Some(Right),            // visarga
        '\u{0A3C}' => Some(Bottom),           // nukta
        '\u{0A3E}' => Some(Right),            // aa
        '\u{0A3F}' => Some(Left),             // i
        '\u{0A40}' => Some(Right),            // ii
        '\u{0A41}'..='\u{0A42}' => Some(Bottom), // u, uu
        '\u{0A47}'..='\u{0A48}' => Some(Top), // ee, ai
        '\u{0A4B}'..='\u{0A4C}' => Some(Top), // oo, au
        '\u{0A4D}' => Some(Bottom),           // virama
        '\u{0A70}'..='\u{0A71}' => Some(Top), // tippi, addak

        // Gujarati
        '\u{0A81}'..='\u{0A82}' => Some(Top), // candrabindu, anusvara
        '\u{0A83}' => Some(Right),            // visarga
        '\u{0ABC}' => Some(Bottom),           // nukta
        '\u{0ABE}' => Some(Right),            // aa
        '\u{0ABF}' => Some(Left),             // i
        '\u{0AC0}' => Some(Right),            // ii
        '\u{0AC1}'..='\u{0AC4}' => Some(Bottom), // u, uu, vocalic r, vocalic rr
        '\u{0AC5}' => Some(Top),              // candra e
        '\u{0AC7}'..='\u{0AC8}' => Some(Top), // e, ai
        '\u{0AC9}' => Some(Right),            // candra o
        '\u{0ACB}'..='\u{0ACC}' => Some(Right), // o, au
        '\u{0ACD}' => Some(Bottom),           // virama

        // Oriya
        '\u{0B01}' => Some(Top),              // candrabindu
        '\u{0B02}'..='\u{0B03}' => Some(Right), // anusvara, visarga
        '\u{0B3C}' => Some(Bottom),           // nukta
        '\u{0B3E}' => Some(Right),            // aa
        '\u{0B3F}' => Some(Top),              // i
        '\u{0B40}' => Some(Right),            // ii
        '\u{0B41}'..='\u{0B44}' => Some(Bottom), // u, uu, vocalic r, vocalic rr
        '\u{0B47}'..='\u{0B48}' => Some(Left), // e, ai
        '\u{0B4B}'..='\u{0B4C}' => Some(Right), // o, au
        '\u{0B4D}' => Some(Bottom),           // virama
        '\u{0B56}' => Some(Top),              // ai length mark
        '\u{0B57}' => Some(Right),            // au length mark

        // Tamil
        '\u{0B82}' => Some(Top),              // anusvara
        '\u{0BBE}'..='\u{0BBF}' => Some(Right), // aa, i
        '\u{0BC0}' => Some(Top),              // ii
        '\u{0BC1}'..='\u{0BC2}' => Some(Right), // u, uu
        '\u{0BC6}'..='\u{0BC8}' => Some(Left), // e, ee, ai
        '\u{0BCA}'..='\u{0BCC}' => Some(Right), // o, oo, au
        '\u{0BCD}' => Some(Top),              // pulli
        '\u{0BD7}' => Some(Right),            // au length mark

        // Telugu
        '\u{0C00}' => Some(Top),              // combining candrabindu
        '\u{0C01}'..='\u{0C03}' => Some(Right), // candrabindu, anusvara, visarga
        '\u{0C3E}'..='\u{0C40}' => Some(Top), // aa, i, ii
        '\u{0C41}'..='\u{0C44}' => Some(Right), // u, uu, vocalic r, vocalic rr
        '\u{0C46}'..='\u{0C48}' => Some(Top), // e, ee, ai
        '\u{0C4A}'..='\u{0C4C}' => Some(Top), // o, oo, au
        '\u{0C4D}' => Some(Top),              // virama
        '\u{0C55}' => Some(Top),              // length mark
        '\u{0C56}' => Some(Bottom),           // ai length mark
        '\u{0C62}'..='\u{0C63}' => Some(Bottom), // vocalic l, vocalic ll

        // Kannada
        '\u{0C81}' => Some(Top),              // candrabindu
        '\u{0C82}'..='\u{0C83}' => Some(Right), // anusvara, visarga
        '\u{0CBC}' => Some(Bottom),           // nukta
        '\u{0CBE}' => Some(Right),            // aa
        '\u{0CBF}' => Some(Top),              // i
        '\u{0CC0}'..='\u{0CC4}' => Some(Right), // ii, u, uu, vocalic r, vocalic rr
        '\u{0CC6}' => Some(Top),              // e
        '\u{0CC7}'..='\u{0CC8}' => Some(Right), // ee, ai
        '\u{0CCA}'..='\u{0CCB}' => Some(Right), // o, oo
        '\u{0CCC}' => Some(Bottom),           // au
        '\u{0CCD}' => Some(Top),              // virama
        '\u{0CD5}'..='\u{0CD6}' => Some(Right), // length marks
        '\u{0CE2}'..='\u{0CE3}' => Some(Bottom), // vocalic l, vocalic ll

        // Malayalam
        '\u{0D00}'..='\u{0D01}' => Some(Top), // combining anusvara above, candrabindu
        '\u{0D02}'..='\u{0D03}' => Some(Right), // anusvara, visarga
        '\u{0D3E}'..='\u{0D40}' => Some(Right), // aa, i, ii
        '\u{0D41}'..='\u{0D44}' => Some(Right), // u, uu, vocalic r, vocalic rr
        '\u{0D46}'..='\u{0D48}' => Some(Left), // e, ee, ai
        '\u{0D4A}'..='\u{0D4C}' => Some(Left), // o, oo, au
        '\u{0D4D}' => Some(Top),              // virama
        '\u{0D57}' => Some(Right),            // au length mark
        '\u{0D62}'..='\u{0D63}' => Some(Bottom), // vocalic l, vocalic ll

        // Sinhala
        '\u{0D81}' => Some(Top),              // candrabindu
        '\u{0D82}'..='\u{0D83}' => Some(Right), // anusvara, visarga
        '\u{0DCA}' => Some(Top),              // al-lakuna
        '\u{0DCF}' => Some(Right),            // aela-pilla
        '\u{0DD0}'..='\u{0DD1}' => Some(Right), // ketti aeda-pilla, diga aeda-pilla
        '\u{0DD2}'..='\u{0DD3}' => Some(Top), // ketti is-pilla, diga is-pilla
        '\u{0DD4}' | '\u{0DD6}' => Some(Bottom), // ketti paa-pilla, diga paa-pilla
        '\u{0DD8}' => Some(Right),            // gaetta-pilla
        '\u{0DD9}'..='\u{0DDB}' => Some(Left), // kombuva variants
        '\u{0DDC}'..='\u{0DDE}' => Some(Left), // kombuva + pilla combinations
        '\u{0DDF}' => Some(Right),            // gayanukitta
        '\u{0DF2}'..='\u{0DF3}' => Some(Right), // gaetta-pilla variants

        _ => None,
    }
}
