use crate::api::{ApiError, ApiResult, VariantSource};
use crate::mutation::{apply_mutations, original_residue, parse_descriptor};
use crate::types::{Mutation, MutationChartData};
use std::sync::Arc;

/// Callback invoked on every state change
pub type StateCallback = Arc<dyn Fn(&StateEvent) + Send + Sync>;

/// State changes reported to subscribers
#[derive(Clone, Debug, PartialEq)]
pub enum StateEvent {
    Loading,
    ParentSequenceLoaded { length: usize },
    VariantsLoaded { count: usize },
    PropertySelected { property: String },
    Ready,
    Failed { error: String },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Uninitialized,
    Loading,
    Ready,
    Failed,
}

/// Everything a view needs to render the mutation charts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MutationState {
    pub variants: Vec<Mutation>,
    pub properties: Vec<String>,
    pub selected_property: Option<String>,
    pub parent_sequence: String,
    pub mutated_sequence: String,
    pub status: LoadStatus,
}

pub struct MutationDataManager<S> {
    source: S,
    state: MutationState,
    subscribers: Vec<StateCallback>,
}

impl<S: VariantSource> MutationDataManager<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: MutationState::default(),
            subscribers: Vec::new(),
        }
    }

    pub fn with_callback(mut self, callback: StateCallback) -> Self {
        self.subscribers.push(callback);
        self
    }

    pub fn subscribe(&mut self, callback: StateCallback) {
        self.subscribers.push(callback);
    }

    pub fn state(&self) -> &MutationState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state.status == LoadStatus::Ready
    }

    /// Fetches the parent sequence, then the variants, and rebuilds the
    /// whole state from them. On failure the previous data is kept.
    pub async fn initialize(&mut self) -> ApiResult<()> {
        let previous = self.state.status;
        self.state.status = LoadStatus::Loading;
        self.emit(StateEvent::Loading);

        match self.load().await {
            Ok(next) => {
                self.state = next;
                if let Some(property) = self.state.selected_property.clone() {
                    self.emit(StateEvent::PropertySelected { property });
                }
                self.emit(StateEvent::Ready);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to load mutation data: {}", e);
                self.state.status = if previous == LoadStatus::Ready {
                    LoadStatus::Ready
                } else {
                    LoadStatus::Failed
                };
                self.emit(StateEvent::Failed {
                    error: e.to_string(),
                });
                Err(e)
            }
        }
    }

    async fn load(&self) -> ApiResult<MutationState> {
        let parent = self.source.fetch_parent_sequence_data().await?;
        self.emit(StateEvent::ParentSequenceLoaded {
            length: parent.sequence.chars().count(),
        });

        let variants = self.source.fetch_mutation_data().await?;
        self.emit(StateEvent::VariantsLoaded {
            count: variants.len(),
        });

        let properties: Vec<String> = variants
            .first()
            .map(|first| first.properties.names().map(str::to_string).collect())
            .unwrap_or_default();
        let selected_property = properties.first().cloned();

        let mutated_sequence = apply_mutations(&parent.sequence, &variants)?;

        Ok(MutationState {
            variants,
            properties,
            selected_property,
            parent_sequence: parent.sequence,
            mutated_sequence,
            status: LoadStatus::Ready,
        })
    }

    /// Rebuilds the mutated sequence from the current parent sequence and variants.
    pub fn generate_mutated_sequence(&self) -> ApiResult<String> {
        self.ensure_ready()?;
        apply_mutations(&self.state.parent_sequence, &self.state.variants)
    }

    pub fn select_property(&mut self, property: &str) -> ApiResult<()> {
        if !self.state.properties.iter().any(|p| p == property) {
            return Err(ApiError::UnknownProperty(property.to_string()));
        }
        self.state.selected_property = Some(property.to_string());
        self.emit(StateEvent::PropertySelected {
            property: property.to_string(),
        });
        Ok(())
    }

    /// Chart rows for the selected property, one per variant.
    ///
    /// Compound variants are placed at the position of their first
    /// substitution but list the residues of all parts.
    pub fn data_for_selected_property(&self) -> ApiResult<Vec<MutationChartData>> {
        self.ensure_ready()?;
        chart_rows(
            &self.state.variants,
            &self.state.parent_sequence,
            self.state.selected_property.as_deref(),
        )
    }

    /// Queries need data from at least one successful `initialize`.
    fn ensure_ready(&self) -> ApiResult<()> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(ApiError::NotInitialized)
        }
    }

    fn emit(&self, event: StateEvent) {
        for callback in &self.subscribers {
            callback(&event);
        }
    }
}

fn chart_rows(
    variants: &[Mutation],
    parent_sequence: &str,
    property: Option<&str>,
) -> ApiResult<Vec<MutationChartData>> {
    variants
        .iter()
        .map(|variant| {
            let parts = parse_descriptor(&variant.mutation)?;
            // parse_descriptor never returns an empty list
            let first = parts[0];
            Ok(MutationChartData {
                mutation_position: first.position,
                value: property.and_then(|p| variant.properties.get(p)),
                mutated_amino_acid: parts.iter().map(|s| s.mutant).collect(),
                original_amino_acid: original_residue(parent_sequence, first.index()),
            })
        })
        .collect()
}
