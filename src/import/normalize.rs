//! Service-name normalization
//!
//! Imported files spell service names loosely: wrong case, missing accents,
//! abbreviations ("RH"), extra qualifiers. Normalization maps them onto the
//! canonical service-name set; text that matches nothing is passed through
//! unchanged so downstream filtering shows it as an unmatched literal rather
//! than fabricating a service that does not exist.

/// Uppercased alias → canonical service name.
///
/// Order matters for the containment fallback: the first key matched wins.
const SERVICE_ALIASES: &[(&str, &str)] = &[
    ("DIRECTION", "Direction"),
    ("SERVICE TECHNIQUE", "Service Technique"),
    ("SERVICES TECHNIQUES", "Service Technique"),
    ("TECHNIQUE", "Service Technique"),
    ("FINANCES", "Finances"),
    ("FINANCE", "Finances"),
    ("ACCUEIL À LA POPULATION", "Accueil à la population"),
    ("ACCUEIL A LA POPULATION", "Accueil à la population"),
    ("ACCUEIL", "Accueil à la population"),
    ("RESSOURCES HUMAINES", "Ressources humaines"),
    ("RH", "Ressources humaines"),
    ("MÉDIATHÈQUE", "Médiathèque"),
    ("MEDIATHEQUE", "Médiathèque"),
    ("ENFANCE JEUNESSE", "Enfance jeunesse"),
    ("ENFANCE", "Enfance jeunesse"),
    ("JEUNESSE", "Enfance jeunesse"),
    ("RESTAURATION SCOLAIRE", "Restauration scolaire"),
    ("RESTAURATION", "Restauration scolaire"),
    ("CANTINE", "Restauration scolaire"),
];

/// Map a loosely-typed service label onto the canonical service-name set.
///
/// Exact match on the uppercased, trimmed input first; then a bidirectional
/// substring containment check against each alias key; finally the trimmed
/// original text unchanged.
pub fn normalize_service_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let upper = trimmed.to_uppercase();

    for (key, canonical) in SERVICE_ALIASES {
        if upper == *key {
            return (*canonical).to_string();
        }
    }

    for (key, canonical) in SERVICE_ALIASES {
        if upper.contains(key) || key.contains(upper.as_str()) {
            return (*canonical).to_string();
        }
    }

    trimmed.to_string()
}
