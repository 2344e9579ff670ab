use crate::contract::model::AccountProfile;
use crate::infra::storage::entity::{admin, gui_props};

/// Stored preference pair with NULL and empty strings normalized to None
pub fn stored_preferences(row: gui_props::Model) -> (Option<String>, Option<String>) {
    (non_empty(row.lang), non_empty(row.layout))
}

/// Convert a database entity to a contract profile.
/// NULL profile columns flatten to empty strings; `state` keeps its
/// optionality because the column itself is optional.
pub fn profile_to_contract(entity: admin::Model) -> AccountProfile {
    AccountProfile {
        customer_id: entity.customer_id.unwrap_or_default(),
        first_name: entity.fname.unwrap_or_default(),
        last_name: entity.lname.unwrap_or_default(),
        company: entity.firm.unwrap_or_default(),
        zip: entity.zip.unwrap_or_default(),
        city: entity.city.unwrap_or_default(),
        state: entity.state,
        country: entity.country.unwrap_or_default(),
        email: entity.email.unwrap_or_default(),
        phone: entity.phone.unwrap_or_default(),
        fax: entity.fax.unwrap_or_default(),
        street1: entity.street1.unwrap_or_default(),
        street2: entity.street2.unwrap_or_default(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings_normalize_to_none() {
        let row = gui_props::Model {
            user_id: 1,
            lang: Some(String::new()),
            layout: Some("green".to_string()),
        };
        assert_eq!(stored_preferences(row), (None, Some("green".to_string())));
    }

    #[test]
    fn null_profile_columns_flatten_to_empty() {
        let entity = admin::Model {
            admin_id: 1,
            customer_id: None,
            fname: Some("Jane".to_string()),
            lname: None,
            firm: None,
            zip: None,
            city: None,
            state: None,
            country: None,
            email: None,
            phone: None,
            fax: None,
            street1: None,
            street2: None,
        };

        let profile = profile_to_contract(entity);
        assert_eq!(profile.first_name, "Jane");
        assert_eq!(profile.customer_id, "");
        assert_eq!(profile.state, None);
    }
}
