//! Client-side list filtering by name and country.

use serde::{Deserialize, Serialize};

use crate::model::User;

/// How the country input is matched against `location.country`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountryMatch {
    /// Case-insensitive substring of the country.
    #[default]
    Substring,
    /// Case-insensitive equality, fed by a selector of known countries.
    Exact,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserFilter {
    pub name: String,
    pub country: String,
    pub country_match: CountryMatch,
}

impl UserFilter {
    pub fn new(country_match: CountryMatch) -> Self {
        Self {
            country_match,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.country.is_empty()
    }

    pub fn matches(&self, user: &User) -> bool {
        let full_name = user.full_name().to_lowercase();
        if !full_name.contains(&self.name.to_lowercase()) {
            return false;
        }

        if self.country.is_empty() {
            return true;
        }
        let country = user.location.country.to_lowercase();
        let wanted = self.country.to_lowercase();
        match self.country_match {
            CountryMatch::Substring => country.contains(&wanted),
            CountryMatch::Exact => country == wanted,
        }
    }

    /// Users matching both inputs, in list order.
    pub fn apply<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        users.iter().filter(|user| self.matches(user)).collect()
    }
}

/// Distinct countries of `users`, sorted, for the exact-match selector.
pub fn countries(users: &[User]) -> Vec<String> {
    let mut countries: Vec<String> = users
        .iter()
        .map(|user| user.location.country.clone())
        .filter(|country| !country.is_empty())
        .collect();
    countries.sort_by_key(|country| country.to_lowercase());
    countries.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
    countries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dob, Location, Name, Picture};

    fn user(id: &str, name: Name, country: &str) -> User {
        User {
            id: id.to_string(),
            gender: "female".to_string(),
            name,
            location: Location {
                country: country.to_string(),
                ..Location::default()
            },
            email: String::new(),
            phone: String::new(),
            picture: Picture::default(),
            dob: Dob::default(),
        }
    }

    fn sample() -> Vec<User> {
        vec![
            user("1", Name::new("Dr", "Jane", "Doe"), "France"),
            user("2", Name::new("Mr", "Jon", "Smith"), "Spain"),
        ]
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let users = sample();
        assert_eq!(UserFilter::default().apply(&users).len(), 2);
    }

    #[test]
    fn name_matches_any_part_case_insensitively() {
        let users = sample();
        let hits = UserFilter::default().with_name("DR JA").apply(&users);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }

    #[test]
    fn substring_country_matches_fragment() {
        let users = sample();
        let hits = UserFilter::new(CountryMatch::Substring)
            .with_country("pa")
            .apply(&users);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");
    }

    #[test]
    fn exact_country_rejects_fragment() {
        let users = sample();
        let filter = UserFilter::new(CountryMatch::Exact);
        assert!(filter.clone().with_country("pa").apply(&users).is_empty());
        let hits = filter.with_country("spain").apply(&users);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");
    }

    #[test]
    fn countries_are_sorted_and_distinct() {
        let mut users = sample();
        users.push(user("3", Name::new("Ms", "Ana", "Ruiz"), "spain"));
        users.push(user("4", Name::new("Mx", "Kai", "Lee"), ""));
        assert_eq!(countries(&users), vec!["France".to_string(), "Spain".to_string()]);
    }
}
