//! Dataset extraction

use indexmap::IndexSet;

use super::error::{DatasetError, DatasetResult};
use crate::config::{DatasetConfig, Validator};
use crate::filter::{self, FilterDescriptor};
use crate::parser;
use crate::value::{DynamicValue, Map};

/// Object records lifted out of a payload, plus the property names they use
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Map>,
    properties: IndexSet<String>,
}

impl Dataset {
    /// Parse `text` and extract its records
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Config` for an invalid configuration,
    /// `DatasetError::Parse` for malformed text, and the shape errors
    /// described on [`Dataset::from_value`].
    pub fn parse(text: &str, config: &DatasetConfig) -> DatasetResult<Self> {
        config.validate()?;
        let tree = parser::parse_with_config(text, &config.parser)?;
        Self::from_value(tree, config)
    }

    /// Extract records from an already parsed tree
    ///
    /// Array elements that are not objects are skipped.
    ///
    /// # Errors
    ///
    /// - `NotAnObject` if the root is not an object
    /// - `MissingCollection` if the collection member is absent
    /// - `NotAnArray` if the collection member is not an array
    pub fn from_value(tree: DynamicValue, config: &DatasetConfig) -> DatasetResult<Self> {
        let key = config.collection_key.as_str();

        let found = tree.type_name();
        let mut root = tree
            .into_object()
            .ok_or(DatasetError::NotAnObject { found })?;

        let collection = root
            .swap_remove(key)
            .ok_or_else(|| DatasetError::MissingCollection(key.to_string()))?;

        let found = collection.type_name();
        let items = collection.into_array().ok_or_else(|| DatasetError::NotAnArray {
            key: key.to_string(),
            found,
        })?;

        let total = items.len();
        let records: Vec<Map> = items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let type_name = item.type_name();
                let record = item.into_object();
                if record.is_none() {
                    tracing::debug!(
                        target: "datasieve::dataset",
                        index,
                        found = type_name,
                        "skipping non-object element"
                    );
                }
                record
            })
            .collect();

        let dataset = Self::from_records(records);
        tracing::debug!(
            target: "datasieve::dataset",
            collection = key,
            elements = total,
            records = dataset.len(),
            properties = dataset.properties.len(),
            "dataset extracted"
        );
        Ok(dataset)
    }

    /// Wrap records that were obtained some other way
    #[must_use]
    pub fn from_records(records: Vec<Map>) -> Self {
        let properties = records
            .iter()
            .flat_map(|record| record.keys().cloned())
            .collect();
        Self {
            records,
            properties,
        }
    }

    #[must_use]
    pub fn records(&self) -> &[Map] {
        &self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<Map> {
        self.records
    }

    /// Every property name seen, in order of first appearance
    #[must_use]
    pub fn properties(&self) -> &IndexSet<String> {
        &self.properties
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the payload held no records ("no data available")
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records satisfying every descriptor, in payload order
    #[must_use]
    pub fn filter(&self, descriptors: &[FilterDescriptor]) -> Vec<&Map> {
        filter::filter(&self.records, descriptors)
    }
}
