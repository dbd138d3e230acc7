//! Built-in OCR correction tables.
//!
//! Each table is an ordered rewrite list: rules are applied top to bottom and a
//! later rule may rely on an earlier one having fired. Keep them as slices of
//! pairs, never as a map.

/// Corrections shared by every document kind: ruled-line debris, dash and
/// bullet variants, then word-level misreads seen in statute OCR.
pub const BASE_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("~~~", " "),
    ("~_~~", " "),
    ("_~~", " "),
    ("—", "-"),
    ("–", "-"),
    ("•", " "),
    ("\u{fffd}", " "),
    ("\u{200b}", ""),
    ("පනන", "පනත"),
    ("ජනත", "පනත"),
    ("චාර්තා", "වාර්තා"),
    ("චාර්තාව", "වාර්තාව"),
    ("චාර්තාවික්", "වාර්තාවක්"),
    ("සනත", "පනත"),
    ("අමාතාවරසයා", "අමාත්\u{200d}යවරයා"),
    ("අමාතනාවරයාගේ", "අමාත්\u{200d}යවරයාගේ"),
    ("නියෝරිත", "නියෝජිත"),
    ("අහියාචනය", "අභියාචනය"),
    ("තිරණය", "තීරණය"),
    ("මණඩල", "මණ්ඩල"),
    ("පජිටපන්", "පිටපත්"),
    ("කිරිම", "කිරීම"),
    ("කිරිමේ", "කිරීමේ"),
    ("ලැබිමේ", "ලැබීමේ"),
    ("රජයේ", "රජයේ"),
    ("පඊලිමේන්තූව", "පාර්ලිමේන්තුව"),
    ("ශ්\u{200d}රී ලඋංකා", "ශ්\u{200d}රී ලංකා"),
    ("ඇණ්\u{200c} ඞුවේ", "ආණ්ඩුවේ"),
];

/// Additional corrections observed in extraordinary gazette OCR, applied after
/// [`BASE_SUBSTITUTIONS`]. Includes mangled mastheads that span line breaks.
pub const GAZETTE_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("ලංකා ප්\u{200d}රරාතාත්්\u{200d}රථික සමාරටා\n\nරත0ර්යේ ගැසට රතුය", "ශ්\u{200d}රී ලංකා ප්\u{200d}රජාතාන්ත්\u{200d}රික සමාජවාදී ජනරජයේ ගැසට්\u{200c} පත්\u{200d}රය"),
    ("ලකා ටුරාතාන්\u{200d}යික ස වාදී රතු0රයේ ගැ", "ශ්\u{200d}රී ලංකා ප්\u{200d}රජාතාන්ත්\u{200d}රික සමාජවාදී ජනරජයේ ගැසට්\u{200c} "),
    ("ලක රුරාරානිඅකි සමාරා තරයේ", "ශ්\u{200d}රී ලංකා ප්\u{200d}රජාතාන්ත්\u{200d}රික සමාජවාදී ජනරජයේ "),
    ("ලංකා ප්\u{200d}රරාතාත්්\u{200d}රඩික සමාරටා\n\nරත0ර්යේ ගැසට රඊතුය", "ශ්\u{200d}රී ලංකා ප්\u{200d}රජාතාන්ත්\u{200d}රික සමාජවාදී ජනරජයේ ගැසට්\u{200c} පත්\u{200d}රය"),
    ("අනි විශෙෂ", "අති විශෙෂ"),
    ("අති විශෙෂ", "අති විශේෂ"),
    ("අහහරුවාදා", "අඟහරුවාදා"),
    ("කොමසාරිස්", "කොමසාරිස්"),
    ("නීරණ", "තීරණ"),
    ("නීරණ ප්\u{200d}රකාශය", "තීරණ ප්\u{200d}රකාශය"),
    ("ගිමිකම්\u{200c}", "හිමිකම්\u{200c}"),
    ("ගිමිකම්", "හිමිකම්"),
    ("ගිමිකම්\u{200c} ලියාපදිංචි", "හිමිකම්\u{200c} ලියාපදිංචි"),
    ("ගිමිකම්\u{200c} ලියාපදිංචි කිරීමේ", "හිමිකම්\u{200c} ලියාපදිංචි කිරීමේ"),
    ("ගිමිකම්\u{200c} නිරවුල්", "හිමිකම්\u{200c} නිරවුල්"),
    ("හිමිකම්\u{200c} නිරවුල්\u{200c} කිරීමේ කොමසාරිස්ගේ නීරණ", "හිමිකම්\u{200c} නිරවුල්\u{200c} කිරීමේ කොමසාරිස්ගේ තීරණ"),
    ("චැනි දින", "වැනි දින"),
    ("චැනි වගන්නිය", "වැනි වගන්තිය"),
    ("14 චැනි වගන්නියෙන්\u{200c}", "14 වැනි වගන්තියෙන්\u{200c}"),
    ("12 වැනි\nවගන්තිය", "12 වැනි වගන්තිය"),
    ("යථා පරිදි පළකරන ලද", "යථා පරිදි පළ කරන ලද"),
    ("ගැසට්\u{200c}\nපත්\u{200d}රයේ", "ගැසට්\u{200c} පත්\u{200d}රයේ"),
    ("ගැසට්\u{200c}\nපත්\u{200d}රඹයේ", "ගැසට්\u{200c} පත්\u{200d}රයේ"),
    ("අනිරේකයක", "අතිරේකයක"),
    ("අතිරේකයක' වශයෙන'", "අතිරේකයක වශයෙන්"),
    ("වශයෙන", "වශයෙන්"),
    ("පළ කරන ලදී", "පළ කරන ලදී"),
    ("ක්\u{200d}රී ලංකා", "ශ්\u{200d}රී ලංකා"),
    ("පරලිමේන්තූව", "පාර්ලිමේන්තුව"),
    ("කැඩැස්තර සිනියමේ", "කැඩැස්තර සිතියමේ"),
    ("කැඩැස්තර සිනියමේ කලාප", "කැඩැස්තර සිතියමේ කලාප"),
    ("කැඩැස්තර සිතියමේ කලාප අංක (0/7", "කැඩැස්තර සිතියමේ කලාප අංක 07"),
    ("කලාප අංක (05", "කලාප අංක 05"),
    ("කලාප අංක 0]", "කලාප අංක 01"),
    ("අයිනිය", "අයිතිය"),
    ("අයිනිය සමඟ", "අයිතිය සමඟ"),
    ("මා චෙත පචරා", "මා වෙත පවරා"),
    ("චෙත පචරා", "වෙත පවරා"),
    ("පචරා", "පවරා"),
    ("ඇනි බලනල", "ඇති බලතල"),
    ("ඇනි බලතල", "ඇති බලතල"),
    ("බලනල", "බලතල"),
    ("රජමල්චත්න පාර", "රජමල්වත්ත පාර"),
    ("\"මිහිකත මැදුර\"", "\"මිහිකත මැදුර\""),
    ("දෙපාර්තමේන්තුවේ දී ය", "දෙපාර්තමේන්තුවේදී ය"),
    ("ඔක්තොෞබර්", "ඔක්තෝබර්"),
    ("කොමසාරිස්\u{200c}.\n\n2016", "කොමසාරිස්\u{200c}.\n\n2016"),
    ("ප්\u{200d}රථම පන්නිය", "ප්\u{200d}රථම පන්තිය"),
    ("ප්\u{200d}රථම පන්තිය", "ප්\u{200d}රථම පන්තිය"),
    ("මාර්ග පරවශනා", "මාර්ග පරවශතා"),
    ("මාර්ග පරවශතා", "මාර්ග පරවශතා"),
    ("භුක්නියට", "භුක්තියට"),
    ("භුක්නියට\nයටත්ව", "භුක්තියට යටත්ව"),
    ("බලයපිට", "බලය පිට"),
    ("ඡෙදය", "ඡේදය"),
    ("දංකේතය", "සංකේතය"),
    ("(රැපියල්\u{200c})", "(රුපියල්\u{200c})"),
    ("ඳින", "දින"),
    ("අත්කර ගන්නා ලදී", "අත්කර ගන්නා ලදී"),
    ("අත්කර ගැනීමේ කටයුතු අවසන්\u{200c} කිරීම සඳහා", "අත්කර ගැනීමේ කටයුතු අවසන් කිරීම සඳහා"),
    ("පරවශතාවයට", "පවරාගැනීමට"),
    ("පරවශතාවය", "පවරාගැනීම"),
    ("වැනි 'දින", "වැනි දින"),
    ("පදිංචි පදිංචි", "පදිංචි"),
    ("හිමිකම්\u{200c} පාන්නා;:", "හිමිකම් පාන්නා:"),
    ("හිමිකම්\u{200c} පානනා", "හිමිකම් පාන්නා"),
];

/// Owned copy of the table for a document kind, in application order.
pub fn default_substitutions(gazette: bool) -> Vec<(String, String)> {
    let extra: &[(&str, &str)] = if gazette { GAZETTE_SUBSTITUTIONS } else { &[] };
    BASE_SUBSTITUTIONS
        .iter()
        .chain(extra.iter())
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}
