//! The static person roster: the read-only data source behind the card list.
//!
//! A [`Roster`] is an ordered collection of [`Person`] records, loaded once at
//! startup and never mutated afterwards.  Lookup by [`PersonId`] is O(1) via
//! an index map, so the renderer can resolve the current selection every frame
//! without scanning.
//!
//! Rosters can come from two places:
//! - [`Roster::builtin`] — a compiled-in set of five scientists
//! - [`Roster::from_json`] — a JSON array of person objects (see [`Person`]
//!   for the field names)

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a person, unique within a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub u32);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One person record.  Immutable for the lifetime of the process.
///
/// `image_url` is an opaque reference passed straight through to the detail
/// pane; it is never fetched or validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub field: String,
    pub achievement: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Errors that can occur while building a roster
#[derive(Debug, Clone)]
pub enum RosterError {
    /// The JSON source could not be parsed
    Parse { message: String },

    /// Two records share the same id
    DuplicateId { id: PersonId },
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::Parse { message } => {
                write!(f, "Failed to parse roster: {}", message)
            }
            RosterError::DuplicateId { id } => {
                write!(f, "Duplicate person id {} in roster", id)
            }
        }
    }
}

impl std::error::Error for RosterError {}

/// An ordered, read-only list of people with O(1) id lookup.
#[derive(Debug, Clone)]
pub struct Roster {
    people: Vec<Person>,
    index: FxHashMap<PersonId, usize>,
}

impl Roster {
    /// Build a roster from a list of people, preserving order.
    ///
    /// Ids must be unique: the id is the lookup key the renderer resolves the
    /// current selection against, so a collision would make resolution
    /// ambiguous.
    pub fn new(people: Vec<Person>) -> Result<Self, RosterError> {
        let mut index = FxHashMap::default();
        for (i, person) in people.iter().enumerate() {
            if index.insert(person.id, i).is_some() {
                return Err(RosterError::DuplicateId { id: person.id });
            }
        }
        Ok(Roster { people, index })
    }

    /// The compiled-in roster used when no file is given.
    pub fn builtin() -> Self {
        let people = vec![
            Person {
                id: PersonId(1),
                name: "Marie Curie".to_string(),
                field: "Physics & Chemistry".to_string(),
                achievement: "Pioneered radioactivity research; first person to win two Nobel Prizes"
                    .to_string(),
                image_url: "https://upload.wikimedia.org/wikipedia/commons/7/7e/Marie_Curie_c1920.jpg"
                    .to_string(),
            },
            Person {
                id: PersonId(2),
                name: "Charles Darwin".to_string(),
                field: "Biology".to_string(),
                achievement: "Formulated the theory of evolution by natural selection".to_string(),
                image_url:
                    "https://upload.wikimedia.org/wikipedia/commons/2/2e/Charles_Darwin_seated_crop.jpg"
                        .to_string(),
            },
            Person {
                id: PersonId(3),
                name: "Isaac Newton".to_string(),
                field: "Physics & Mathematics".to_string(),
                achievement: "Laws of motion and universal gravitation; co-invented calculus"
                    .to_string(),
                image_url:
                    "https://upload.wikimedia.org/wikipedia/commons/3/39/GodfreyKneller-IsaacNewton-1689.jpg"
                        .to_string(),
            },
            Person {
                id: PersonId(4),
                name: "Ada Lovelace".to_string(),
                field: "Mathematics & Computing".to_string(),
                achievement: "Wrote the first published algorithm intended for a machine".to_string(),
                image_url:
                    "https://upload.wikimedia.org/wikipedia/commons/a/a4/Ada_Lovelace_portrait.jpg"
                        .to_string(),
            },
            Person {
                id: PersonId(5),
                name: "Albert Einstein".to_string(),
                field: "Physics".to_string(),
                achievement: "Developed the theory of relativity".to_string(),
                image_url:
                    "https://upload.wikimedia.org/wikipedia/commons/d/d3/Albert_Einstein_Head.jpg"
                        .to_string(),
            },
        ];

        // Builtin ids are distinct by construction
        Roster::new(people).unwrap_or_else(|_| Roster {
            people: Vec::new(),
            index: FxHashMap::default(),
        })
    }

    /// Parse a roster from a JSON array of person objects.
    ///
    /// Field names follow the conventional card-data shape:
    /// `[{"id": 1, "name": "...", "field": "...", "achievement": "...", "imageUrl": "..."}]`
    pub fn from_json(source: &str) -> Result<Self, RosterError> {
        let people: Vec<Person> = serde_json::from_str(source).map_err(|e| RosterError::Parse {
            message: e.to_string(),
        })?;
        Roster::new(people)
    }

    /// Resolve an id to its person, if present.
    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.index.get(&id).map(|&i| &self.people[i])
    }

    /// All people in roster order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}
