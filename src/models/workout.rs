use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier as handed out by the backing store. Both numeric and string
/// keys are accepted and kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        RecordId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Int(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => RecordId(s),
            Raw::Int(n) => RecordId(n.to_string()),
        })
    }
}

/// `null` and a missing key both mean "nothing here".
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ─── Exercise definition ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseDef {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub muscle_group: Option<String>,
    #[serde(default)]
    pub equipment: Option<String>,
}

// ─── Exercise set ────────────────────────────────────────────────────────────

/// One configured exercise inside a workout, with its own prescription.
/// Not a single physical set: `sets` says how many of those were done.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSet {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_index: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sets: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reps: i64,
    /// Kilograms.
    #[serde(default, deserialize_with = "null_as_default")]
    pub weight: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rest_seconds: i64,
    #[serde(default, rename = "exercises")]
    pub exercise: Option<ExerciseDef>,
}

impl ExerciseSet {
    pub fn new(sets: i64, reps: i64, weight: f64, rest_seconds: i64) -> Self {
        Self {
            id: None,
            order_index: 0,
            sets,
            reps,
            weight,
            rest_seconds,
            exercise: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.exercise = Some(ExerciseDef {
            id: None,
            name: name.into(),
            muscle_group: None,
            equipment: None,
        });
        self
    }

    pub fn display_name(&self) -> &str {
        match &self.exercise {
            Some(def) if !def.name.is_empty() => &def.name,
            _ => "Exercise",
        }
    }

    /// Lifted volume: sets × reps × weight.
    pub fn volume(&self) -> f64 {
        self.sets as f64 * self.reps as f64 * self.weight
    }
}

// ─── Workout ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub id: RecordId,
    #[serde(default)]
    pub user_id: Option<RecordId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(
        default,
        rename = "workout_exercises",
        alias = "exercise_sets",
        deserialize_with = "null_as_default"
    )]
    pub exercise_sets: Vec<ExerciseSet>,
}

impl WorkoutRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::new(id),
            user_id: None,
            name: name.into(),
            description: None,
            frequency: None,
            created_at,
            exercise_sets: vec![],
        }
    }

    pub fn with_set(mut self, mut set: ExerciseSet) -> Self {
        set.order_index = self.exercise_sets.len() as i64;
        self.exercise_sets.push(set);
        self
    }

    /// Exercise sets in display order. Aggregation never depends on it.
    pub fn ordered_sets(&self) -> Vec<&ExerciseSet> {
        let mut sets: Vec<&ExerciseSet> = self.exercise_sets.iter().collect();
        sets.sort_by_key(|s| s.order_index);
        sets
    }

    pub fn volume(&self) -> f64 {
        self.exercise_sets.iter().map(ExerciseSet::volume).sum()
    }
}
