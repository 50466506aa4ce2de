use crate::api::{ApiError, ApiResult};
use crate::types::Mutation;

/// One point substitution from a mutation descriptor, e.g. `A123C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointSubstitution {
    pub wild_type: Option<char>,
    /// 1-based, as written in the descriptor.
    pub position: usize,
    pub mutant: char,
}

impl PointSubstitution {
    /// Parses a single descriptor part.
    ///
    /// The position is the first run of digits and the mutant is the last
    /// character. A leading uppercase letter is taken as the wild-type
    /// residue; anything else leaves the wild type unknown.
    pub fn parse(part: &str) -> ApiResult<Self> {
        let part = part.trim();
        let mutant = part
            .chars()
            .last()
            .ok_or_else(|| ApiError::invalid_mutation(part, "empty substitution"))?;

        let digits: String = part
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if digits.is_empty() {
            return Err(ApiError::invalid_mutation(part, "no position found"));
        }
        let position: usize = digits
            .parse()
            .map_err(|_| ApiError::invalid_mutation(part, "position does not fit"))?;
        if position == 0 {
            return Err(ApiError::invalid_mutation(part, "positions are 1-based"));
        }
        if mutant.is_ascii_digit() {
            return Err(ApiError::invalid_mutation(part, "missing mutant residue"));
        }

        let wild_type = part
            .chars()
            .next()
            .filter(|c| c.is_ascii_uppercase());

        Ok(Self {
            wild_type,
            position,
            mutant,
        })
    }

    /// Whether `residue` agrees with the wild type, if one was given.
    pub fn matches_wild_type(&self, residue: char) -> bool {
        self.wild_type.map_or(true, |wild_type| wild_type == residue)
    }

    /// 0-based index into the sequence.
    pub fn index(&self) -> usize {
        self.position - 1
    }
}

/// Splits a (possibly compound) descriptor on `+` and parses every part.
pub fn parse_descriptor(descriptor: &str) -> ApiResult<Vec<PointSubstitution>> {
    descriptor
        .split('+')
        .map(|part| {
            PointSubstitution::parse(part).map_err(|e| match e {
                ApiError::InvalidMutation { reason, .. } => {
                    ApiError::invalid_mutation(descriptor, reason)
                }
                other => other,
            })
        })
        .collect()
}

/// Applies every substitution of every record, in order, to a copy of
/// `parent`. Later records overwrite earlier ones at the same position.
pub fn apply_mutations(parent: &str, mutations: &[Mutation]) -> ApiResult<String> {
    let original: Vec<char> = parent.chars().collect();
    let mut residues = original.clone();

    for record in mutations {
        for substitution in parse_descriptor(&record.mutation)? {
            let index = substitution.index();
            let parent_residue = original.get(index).copied().ok_or_else(|| {
                ApiError::PositionOutOfRange {
                    descriptor: record.mutation.clone(),
                    position: substitution.position,
                    length: original.len(),
                }
            })?;

            if !substitution.matches_wild_type(parent_residue) {
                log::warn!(
                    "Wild-type mismatch in '{}': expected {} at position {}, parent has {}",
                    record.mutation,
                    substitution.wild_type.unwrap_or('?'),
                    substitution.position,
                    parent_residue
                );
            }

            residues[index] = substitution.mutant;
        }
    }

    Ok(residues.into_iter().collect())
}

/// Residue of `sequence` at a 0-based index.
pub fn original_residue(sequence: &str, index: usize) -> Option<char> {
    sequence.chars().nth(index)
}
