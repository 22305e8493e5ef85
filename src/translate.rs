//! Static French→English dictionaries for provincial CSV exports. Every
//! lookup falls back to the input string when no translation exists.

pub fn translate_header(name: &str) -> &str {
    match name {
        "Portefeuille" => "Portfolio",
        "Programme" => "Program",
        "Nom_programme" => "Program_Name",
        "Element" => "Element",
        "Nom_element" => "Element_Name",
        "Repartition" => "Distribution",
        "Supercategorie" => "Supercategory",
        "Montant" => "Amount",
        "Objet_aide" => "Assistance_Objective",
        "Bénéficiaires" => "Beneficiaries",
        "Fonds_special" => "Special_Fund",
        "REGRP_Sommaire" => "REGRP_Summary",
        "REGRP_Nom" => "REGRP_Name",
        other => other,
    }
}

pub fn translate_portfolio(name: &str) -> &str {
    match name {
        "Assemblée nationale" => "National Assembly",
        "Personnes désignées par l'Assemblée nationale" => {
            "Persons Designated by the National Assembly"
        }
        "Affaires municipales et Habitation" => "Municipal Affairs and Housing",
        "Agriculture, Pêcheries et Alimentation" => "Agriculture, Fisheries and Food",
        "Conseil du trésor et Administration gouvernementale" => {
            "Treasury Board and Government Administration"
        }
        "Conseil exécutif" => "Executive Council",
        "Culture et Communications" => "Culture and Communications",
        "Cybersécurité et Numérique" => "Cybersecurity and Digital",
        "Économie, Innovation et Énergie" => "Economy, Innovation and Energy",
        "Éducation" => "Education",
        "Emploi et Solidarité sociale" => "Employment and Social Solidarity",
        "Enseignement supérieur" => "Higher Education",
        "Environnement, Lutte contre les changements climatiques, Faune" => {
            "Environment, Climate Change Fight, Wildlife"
        }
        "Famille" => "Family",
        "Finances" => "Finance",
        "Immigration, Francisation et Intégration" => "Immigration, Francization and Integration",
        "Justice" => "Justice",
        "Langue française" => "French Language",
        "Relations internationales et Francophonie" => {
            "International Relations and Francophonie"
        }
        "Ressources naturelles et Forêts" => "Natural Resources and Forests",
        "Santé et Services sociaux" => "Health and Social Services",
        "Sécurité publique" => "Public Security",
        "Tourisme" => "Tourism",
        "Transports et Mobilité durable" => "Transportation and Sustainable Mobility",
        "Travail" => "Labor",
        other => other,
    }
}

pub fn translate_program(name: &str) -> &str {
    match name {
        "Secrétariat général et affaires juridiques et parlementaires" => {
            "General Secretariat and Legal and Parliamentary Affairs"
        }
        "Services statutaires aux parlementaires" => "Statutory Services to Parliamentarians",
        "Le Protecteur du citoyen" => "Citizen Protector",
        "Le Vérificateur général" => "Auditor General",
        "Administration du système électoral" => "Electoral System Administration",
        "Le Commissaire au lobbyisme" => "Lobbying Commissioner",
        "Le Commissaire à l'éthique et à la déontologie" => {
            "Ethics and Deontology Commissioner"
        }
        "Le Commissaire à la langue française" => "French Language Commissioner",
        "Soutien aux activités ministérielles" => "Support for Ministerial Activities",
        "Modernisation des infrastructures municipales" => {
            "Modernization of Municipal Infrastructure"
        }
        "Compensations tenant lieu de taxes et soutien aux municipalités" => {
            "Tax Compensations and Municipal Support"
        }
        "Développement des régions et des territoires" => {
            "Regional and Territorial Development"
        }
        "Commission municipale du Québec" => "Quebec Municipal Commission",
        "Habitation" => "Housing",
        "Organismes d'État" => "Government Organizations",
        "Soutien au Conseil du trésor" => "Support for Treasury Board",
        "Soutien aux fonctions gouvernementales" => "Support for Government Functions",
        "Commission de la fonction publique" => "Public Service Commission",
        "Régimes de retraite et d'assurances" => "Retirement and Insurance Plans",
        "Soutien aux infrastructures gouvernementales" => {
            "Support for Government Infrastructure"
        }
        "Relations canadiennes" => "Canadian Relations",
        "Relations avec les Premières Nations et les Inuit" => {
            "Relations with First Nations and Inuit"
        }
        "Jeunesse" => "Youth",
        "Direction et administration" => "Direction and Administration",
        "Développement de l'économie" => "Economic Development",
        "Développement de la science, de la recherche et de l'innovation" => {
            "Development of Science, Research and Innovation"
        }
        other => other,
    }
}

pub fn translate_element(name: &str) -> &str {
    match name {
        "Secrétariat général et affaires juridiques" => {
            "General Secretariat and Legal Affairs"
        }
        "Affaires parlementaires" => "Parliamentary Affairs",
        "Affaires administratives et sécurité" => "Administrative Affairs and Security",
        "Indemnités et allocations aux parlementaires" => {
            "Indemnities and Allowances to Parliamentarians"
        }
        "Services de recherche des partis politiques" => {
            "Research Services for Political Parties"
        }
        "Le Protecteur du citoyen" => "Citizen Protector",
        "Le Vérificateur général" => "Auditor General",
        "Gestion interne et soutien" => "Internal Management and Support",
        "Commission de la représentation électorale" => {
            "Electoral Representation Commission"
        }
        "Activités électorales" => "Electoral Activities",
        "Direction et administration" => "Direction and Administration",
        "Politiques et programmes" => "Policies and Programs",
        "Compensations tenant lieu de taxes" => "Tax Compensations",
        "Aide financière aux municipalités" => "Financial Assistance to Municipalities",
        "Mesures financières du partenariat fiscal" => {
            "Financial Measures of the Fiscal Partnership"
        }
        "Soutien à la région métropolitaine" => "Support for the Metropolitan Region",
        "Commission municipale du Québec" => "Quebec Municipal Commission",
        "Société d'habitation du Québec" => "Quebec Housing Corporation",
        "Tribunal administratif du logement" => "Administrative Housing Tribunal",
        "Soutien à l'habitation" => "Housing Support",
        "Santé animale et inspection des aliments" => "Animal Health and Food Inspection",
        "La Financière agricole du Québec" => "Quebec Agricultural Finance Corporation",
        other => other,
    }
}

pub fn translate_distribution(name: &str) -> &str {
    match name {
        "Dépenses" => "Expenditures",
        "Investissements" => "Investments",
        "Revenus" => "Revenues",
        "Surplus (déficit)" => "Surplus (Deficit)",
        other => other,
    }
}

pub fn translate_supercategory(name: &str) -> &str {
    match name {
        "Rémunération" => "Remuneration",
        "Fonctionnement" => "Operations",
        "Transfert" => "Transfer",
        "Prêts, placements, avances et autres coûts" => {
            "Loans, Investments, Advances and Other Costs"
        }
        "Immobilisations autres qu'en ressources informationnelles" => "Other Capital Assets",
        "Immobilisations en ressources informationnelles" => {
            "Information Resource Capital Assets"
        }
        "Créances douteuses et autres provisions" => "Doubtful Accounts and Other Provisions",
        "Affectation à un fonds spécial" => "Allocation to Special Fund",
        "Service de la dette" => "Debt Service",
        "Excédent sur les sommes approuvées" => "Surplus on Approved Amounts",
        "Transferts provenant du ministère responsable" => {
            "Transfers from Responsible Ministry"
        }
        "Revenus divers" => "Miscellaneous Revenues",
        "Taxes à la consommation" => "Consumption Taxes",
        other => other,
    }
}

pub fn translate_beneficiary(name: &str) -> &str {
    match name {
        "Organismes à but non lucratif" => "Non-profit Organizations",
        "Entreprises du secteur privé" => "Private Sector Enterprises",
        "Institutions d'enseignement" => "Educational Institutions",
        "Municipalités" => "Municipalities",
        "Organismes et entreprises du gouvernement" => {
            "Government Organizations and Enterprises"
        }
        "Personnes" => "Individuals",
        "Établissements de santé et de services sociaux" => {
            "Health and Social Services Establishments"
        }
        other => other,
    }
}

pub fn translate_assistance_objective(name: &str) -> &str {
    match name {
        "Autres" => "Other",
        "Financement des partis politiques" => "Political Party Funding",
        "Remboursement des dépenses électorales" => "Electoral Expense Reimbursement",
        "Fonds pour l'eau potable et le traitement des eaux usées" => {
            "Fund for Drinking Water and Wastewater Treatment"
        }
        "Fonds pour l'infrastructure municipale d'eau" => {
            "Municipal Water Infrastructure Fund"
        }
        "Infrastructures municipales en milieu nordique" => {
            "Municipal Infrastructure in Northern Environment"
        }
        "Parachèvement des programmes en infrastructures municipales" => {
            "Completion of Municipal Infrastructure Programs"
        }
        "Programme d'aide financière pour les bâtiments municipaux" => {
            "Financial Assistance Program for Municipal Buildings"
        }
        "Programmes de la taxe sur l'essence et de la contribution du Québec" => {
            "Gas Tax and Quebec Contribution Programs"
        }
        "Programmes des Fonds Chantiers Canada-Québec" => {
            "Canada-Quebec Construction Fund Programs"
        }
        "Programmes d'infrastructures Québec-Municipalités" => {
            "Quebec-Municipalities Infrastructure Programs"
        }
        "Aide aux municipalités reconstituées" => "Assistance to Reconstituted Municipalities",
        "Mesures financières du partenariat fiscal" => {
            "Financial Measures of the Fiscal Partnership"
        }
        other => other,
    }
}

/// Catch-all pass over cells the column-wise dictionaries missed.
pub fn translate_any(name: &str) -> &str {
    match name {
        "Autres" => "Other",
        "Fonds régions et ruralité" => "Regional and Rural Fund",
        "Fonds de la région de la Capitale-Nationale" => "National Capital Region Fund",
        "Fonds du patrimoine culturel québécois" => "Quebec Cultural Heritage Fund",
        "Fonds de la cybersécurité et du numérique" => "Cybersecurity and Digital Fund",
        "Fonds des ressources naturelles" => "Natural Resources Fund",
        "Fonds du développement économique" => "Economic Development Fund",
        "Fonds relatif à l'administration fiscale" => "Tax Administration Fund",
        "Fonds de l'économie et de l'innovation" => "Economy and Innovation Fund",
        "Fonds de développement du tourisme" => "Tourism Development Fund",
        other => {
            for translate in [
                translate_beneficiary,
                translate_assistance_objective,
                translate_supercategory,
                translate_distribution,
            ] {
                let translated = translate(other);
                if translated != other {
                    return translated;
                }
            }
            other
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn known_keys_translate() {
        assert_eq!(translate_portfolio("Éducation"), "Education");
        assert_eq!(translate_distribution("Revenus"), "Revenues");
        assert_eq!(translate_supercategory("Rémunération"), "Remuneration");
        assert_eq!(translate_beneficiary("Personnes"), "Individuals");
        assert_eq!(translate_header("REGRP_Sommaire"), "REGRP_Summary");
    }

    #[test]
    fn unknown_keys_fall_back_to_identity() {
        assert_eq!(translate_portfolio("Already English"), "Already English");
        assert_eq!(translate_header("Amount"), "Amount");
        assert_eq!(translate_any("Untranslated term"), "Untranslated term");
    }

    #[test]
    fn catch_all_reaches_every_dictionary() {
        assert_eq!(translate_any("Autres"), "Other");
        assert_eq!(translate_any("Municipalités"), "Municipalities");
        assert_eq!(translate_any("Service de la dette"), "Debt Service");
        assert_eq!(translate_any("Investissements"), "Investments");
    }
}
