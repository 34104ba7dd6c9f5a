//! LDA topic model variant
//!
//! A lightweight latent-topic model: words are seeded onto random topics
//! and reassigned over a fixed number of iterations towards the topic
//! their co-occurring words accumulate on. The capability surface
//! (`train`, `predict`, `getTopics`, `getDescription`) is the contract;
//! the fitting procedure itself is intentionally simple.
//!
//! Trained state lives behind an `RwLock`, so concurrent invocations
//! against the same instance are safe.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::entity::{ModelId, PredictionModel};
use crate::domain::DomainError;

const FUNCTION_TRAIN: &str = "train";
const FUNCTION_PREDICT: &str = "predict";
const FUNCTION_GET_TOPICS: &str = "getTopics";
const FUNCTION_GET_DESCRIPTION: &str = "getDescription";

/// Words shorter than this are dropped during tokenization
const MIN_TOKEN_LENGTH: usize = 3;

/// Terms reported per topic by `getTopics`
const TOP_TERMS_PER_TOPIC: usize = 10;

/// Topic-model hyperparameters, supplied under `creationParameters`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LdaParameters {
    #[serde(default = "default_number_of_topics")]
    pub number_of_topics: usize,

    #[serde(default = "default_iterations")]
    pub iterations: usize,

    /// Smoothing constant for topic distributions
    #[serde(default = "default_alpha")]
    pub alpha: f64,
}

fn default_number_of_topics() -> usize {
    10
}

fn default_iterations() -> usize {
    20
}

fn default_alpha() -> f64 {
    0.1
}

impl Default for LdaParameters {
    fn default() -> Self {
        Self {
            number_of_topics: default_number_of_topics(),
            iterations: default_iterations(),
            alpha: default_alpha(),
        }
    }
}

/// Construction payload for the LDA model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LdaModelSpec {
    pub name: String,
    pub created_by: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub creation_parameters: LdaParameters,
}

#[derive(Debug, Deserialize)]
struct TrainArgs {
    documents: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PredictArgs {
    document: String,
}

/// Fitted state: per-word topic assignments and per-topic term rankings
#[derive(Debug)]
struct TrainedState {
    /// word -> assigned topic index
    assignments: HashMap<String, usize>,
    /// per topic, terms ranked by document frequency
    top_terms: Vec<Vec<String>>,
    document_count: usize,
}

/// LDA model instance
#[derive(Debug)]
pub struct LdaModel {
    id: ModelId,
    model_type: String,
    spec: LdaModelSpec,
    created_at: DateTime<Utc>,
    state: RwLock<Option<TrainedState>>,
}

impl LdaModel {
    /// Construct from a validated specification, assigning a fresh ID
    pub fn from_spec(model_type: impl Into<String>, spec: LdaModelSpec) -> Self {
        Self {
            id: ModelId::generate(),
            model_type: model_type.into(),
            spec,
            created_at: Utc::now(),
            state: RwLock::new(None),
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn parameters(&self) -> &LdaParameters {
        &self.spec.creation_parameters
    }

    fn train(&self, args: &Map<String, Value>) -> Result<Value, DomainError> {
        let args: TrainArgs = parse_args(FUNCTION_TRAIN, args)?;

        if args.documents.is_empty() {
            return Err(DomainError::operation_failure(
                FUNCTION_TRAIN,
                "no documents provided",
            ));
        }

        let documents: Vec<Vec<String>> = args.documents.iter().map(|d| tokenize(d)).collect();
        let state = fit(&documents, self.parameters());

        let response = json!({
            "documents": state.document_count,
            "vocabularySize": state.assignments.len(),
            "numberOfTopics": state.top_terms.len(),
        });

        let mut guard = self.write_state(FUNCTION_TRAIN)?;
        *guard = Some(state);

        Ok(response)
    }

    fn predict(&self, args: &Map<String, Value>) -> Result<Value, DomainError> {
        let args: PredictArgs = parse_args(FUNCTION_PREDICT, args)?;

        let guard = self.read_state(FUNCTION_PREDICT)?;
        let state = guard.as_ref().ok_or_else(|| {
            DomainError::operation_failure(FUNCTION_PREDICT, "model has not been trained")
        })?;

        let k = state.top_terms.len();
        let alpha = self.parameters().alpha;

        let mut counts = vec![0usize; k];
        let mut total = 0usize;
        for token in tokenize(&args.document) {
            if let Some(&topic) = state.assignments.get(&token) {
                counts[topic] += 1;
                total += 1;
            }
        }

        let denominator = total as f64 + k as f64 * alpha;
        let mut distribution = Map::new();
        for (topic, count) in counts.iter().enumerate() {
            let probability = (*count as f64 + alpha) / denominator;
            distribution.insert(topic.to_string(), json!(probability));
        }

        Ok(json!({ "topics": distribution }))
    }

    fn get_topics(&self) -> Result<Value, DomainError> {
        let guard = self.read_state(FUNCTION_GET_TOPICS)?;
        let state = guard.as_ref().ok_or_else(|| {
            DomainError::operation_failure(FUNCTION_GET_TOPICS, "model has not been trained")
        })?;

        let mut topics = Map::new();
        for (topic, terms) in state.top_terms.iter().enumerate() {
            topics.insert(topic.to_string(), json!(terms));
        }

        Ok(json!({ "topics": topics }))
    }

    fn get_description(&self) -> Value {
        json!({
            "name": self.spec.name,
            "createdBy": self.spec.created_by,
            "description": self.spec.description,
            "numberOfTopics": self.parameters().number_of_topics,
        })
    }

    fn read_state(
        &self,
        function: &str,
    ) -> Result<std::sync::RwLockReadGuard<'_, Option<TrainedState>>, DomainError> {
        self.state
            .read()
            .map_err(|e| DomainError::operation_failure(function, format!("state lock: {}", e)))
    }

    fn write_state(
        &self,
        function: &str,
    ) -> Result<std::sync::RwLockWriteGuard<'_, Option<TrainedState>>, DomainError> {
        self.state
            .write()
            .map_err(|e| DomainError::operation_failure(function, format!("state lock: {}", e)))
    }
}

impl PredictionModel for LdaModel {
    fn id(&self) -> &ModelId {
        &self.id
    }

    fn model_type(&self) -> &str {
        &self.model_type
    }

    fn name(&self) -> &str {
        &self.spec.name
    }

    fn function_calls(&self) -> Vec<String> {
        vec![
            FUNCTION_TRAIN.to_string(),
            FUNCTION_PREDICT.to_string(),
            FUNCTION_GET_TOPICS.to_string(),
            FUNCTION_GET_DESCRIPTION.to_string(),
        ]
    }

    fn invoke(&self, function: &str, args: &Map<String, Value>) -> Result<Value, DomainError> {
        match function {
            FUNCTION_TRAIN => self.train(args),
            FUNCTION_PREDICT => self.predict(args),
            FUNCTION_GET_TOPICS => self.get_topics(),
            FUNCTION_GET_DESCRIPTION => Ok(self.get_description()),
            other => Err(DomainError::function_not_implemented(other)),
        }
    }
}

/// Deserialize keyword-style arguments against an operation's schema
fn parse_args<T: serde::de::DeserializeOwned>(
    function: &str,
    args: &Map<String, Value>,
) -> Result<T, DomainError> {
    serde_json::from_value(Value::Object(args.clone()))
        .map_err(|e| DomainError::operation_failure(function, e.to_string()))
}

fn tokenize(document: &str) -> Vec<String> {
    document
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() >= MIN_TOKEN_LENGTH)
        .map(|t| t.to_lowercase())
        .collect()
}

/// Fit topic assignments: random seeding, then iterative reassignment of
/// each word towards the topic its co-occurring words accumulate on.
fn fit(documents: &[Vec<String>], parameters: &LdaParameters) -> TrainedState {
    let k = parameters.number_of_topics.max(1);
    let mut rng = rand::thread_rng();

    let mut document_frequency: HashMap<String, usize> = HashMap::new();
    for tokens in documents {
        let mut seen: Vec<&String> = tokens.iter().collect();
        seen.sort();
        seen.dedup();
        for token in seen {
            *document_frequency.entry(token.clone()).or_insert(0) += 1;
        }
    }

    let mut assignments: HashMap<String, usize> = document_frequency
        .keys()
        .map(|word| (word.clone(), rng.gen_range(0..k)))
        .collect();

    for _ in 0..parameters.iterations {
        let mut changed = false;

        for word in document_frequency.keys() {
            let mut scores = vec![parameters.alpha; k];
            for tokens in documents.iter().filter(|d| d.contains(word)) {
                for other in tokens {
                    if other != word {
                        scores[assignments[other]] += 1.0;
                    }
                }
            }

            let current = assignments[word];
            let best = scores
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.total_cmp(b.1))
                .map(|(topic, _)| topic)
                .unwrap_or(current);

            if best != current {
                assignments.insert(word.clone(), best);
                changed = true;
            }
        }

        if !changed {
            break;
        }
    }

    let mut top_terms: Vec<Vec<(String, usize)>> = vec![Vec::new(); k];
    for (word, &topic) in &assignments {
        top_terms[topic].push((word.clone(), document_frequency[word]));
    }

    let top_terms = top_terms
        .into_iter()
        .map(|mut terms| {
            terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            terms
                .into_iter()
                .take(TOP_TERMS_PER_TOPIC)
                .map(|(word, _)| word)
                .collect()
        })
        .collect();

    TrainedState {
        assignments,
        top_terms,
        document_count: documents.len(),
    }
}
