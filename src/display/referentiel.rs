//! Référentiel display formatting

use crate::models::{Campagne, ServiceMunicipal, Utilisateur};

use super::{cell_width, format_date_fr, pad};

/// Format the campagnes budgétaires as a table
pub fn format_campagne_list(campagnes: &[Campagne]) -> String {
    if campagnes.is_empty() {
        return "Aucune campagne.".to_string();
    }

    let nom_width = campagnes
        .iter()
        .map(|c| cell_width(&c.nom))
        .max()
        .unwrap_or(3)
        .max(3);

    let mut output = String::new();
    output.push_str(&format!(
        "{}  {:<7}  {:<10}  {:<10}  {}\n",
        pad("Nom", nom_width),
        "Période",
        "Début",
        "Fin",
        "État",
    ));
    output.push_str(&format!(
        "{}  {:-<7}  {:-<10}  {:-<10}  {:-<14}\n",
        "-".repeat(nom_width),
        "",
        "",
        "",
        "",
    ));

    for campagne in campagnes {
        output.push_str(&format!(
            "{}  {:<7}  {:<10}  {:<10}  {}\n",
            pad(&campagne.nom, nom_width),
            campagne.periode,
            format_date_fr(campagne.date_debut),
            format_date_fr(campagne.date_fin),
            campagne.etat,
        ));
    }

    output
}

/// Format the services municipaux as a table
pub fn format_service_list(services: &[ServiceMunicipal]) -> String {
    if services.is_empty() {
        return "Aucun service.".to_string();
    }

    let nom_width = services
        .iter()
        .map(|s| cell_width(&s.nom))
        .max()
        .unwrap_or(3)
        .max(3);
    let responsable_width = services
        .iter()
        .map(|s| cell_width(&s.responsable))
        .max()
        .unwrap_or(11)
        .max(11);

    let mut output = String::new();
    output.push_str(&format!(
        "{}  {}  {}\n",
        pad("Service", nom_width.max(7)),
        pad("Responsable", responsable_width),
        "Email",
    ));
    output.push_str(&format!(
        "{}  {}  {:-<25}\n",
        "-".repeat(nom_width.max(7)),
        "-".repeat(responsable_width),
        "",
    ));

    for service in services {
        output.push_str(&format!(
            "{}  {}  {}\n",
            pad(&service.nom, nom_width.max(7)),
            pad(&service.responsable, responsable_width),
            service.email,
        ));
    }

    output
}

/// Format the utilisateurs as a table
pub fn format_utilisateur_list(utilisateurs: &[Utilisateur]) -> String {
    if utilisateurs.is_empty() {
        return "Aucun utilisateur.".to_string();
    }

    let nom_width = utilisateurs
        .iter()
        .map(|u| cell_width(&u.nom))
        .max()
        .unwrap_or(3)
        .max(3);
    let service_width = utilisateurs
        .iter()
        .map(|u| cell_width(&u.service))
        .max()
        .unwrap_or(7)
        .max(7);

    let mut output = String::new();
    output.push_str(&format!(
        "{}  {}  {:<8}  {}\n",
        pad("Nom", nom_width),
        pad("Service", service_width),
        "Rôle",
        "Email",
    ));
    output.push_str(&format!(
        "{}  {}  {:-<8}  {:-<25}\n",
        "-".repeat(nom_width),
        "-".repeat(service_width),
        "",
        "",
    ));

    for utilisateur in utilisateurs {
        output.push_str(&format!(
            "{}  {}  {:<8}  {}\n",
            pad(&utilisateur.nom, nom_width),
            pad(&utilisateur.service, service_width),
            utilisateur.role.to_string(),
            utilisateur.email,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EtatCampagne, Role};
    use chrono::NaiveDate;

    #[test]
    fn test_format_campagnes() {
        let campagne = Campagne::new(
            "Budget 2025",
            "2025",
            NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
            EtatCampagne::Ouvert,
        );
        let output = format_campagne_list(&[campagne]);
        assert!(output.contains("Budget 2025"));
        assert!(output.contains("01/09/2024"));
        assert!(output.contains("Ouvert"));
    }

    #[test]
    fn test_format_services() {
        let service = ServiceMunicipal::new("Direction", "Anne GAVARD", "direction@commune.fr");
        let output = format_service_list(&[service]);
        assert!(output.contains("Anne GAVARD"));
        assert!(output.contains("direction@commune.fr"));
    }

    #[test]
    fn test_format_utilisateurs() {
        let utilisateur =
            Utilisateur::new("Marie DUPONT", "m.dupont@commune.fr", "Finances", Role::Editeur);
        let output = format_utilisateur_list(&[utilisateur]);
        assert!(output.contains("Éditeur"));
        assert!(output.contains("Finances"));
    }
}
