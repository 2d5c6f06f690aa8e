/// Failure to write through a [`ConfigStore`](crate::ConfigStore).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
	/// The store does not accept writes.
	#[error("store is read-only")]
	ReadOnly,

	/// The store refused a particular write.
	#[error("write to {group}.{key} rejected: {reason}")]
	Rejected {
		group: String,
		key: String,
		reason: String,
	},
}

/// Failure to load a [`SyncPolicy`](crate::SyncPolicy).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The TOML text is malformed or names unknown fields.
	#[error("invalid policy: {0}")]
	Toml(#[from] toml::de::Error),
}
