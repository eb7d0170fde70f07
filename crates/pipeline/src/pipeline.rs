//! Single-card and pack generation flows.

use std::path::PathBuf;

use cardsmith_core::card::CardData;
use cardsmith_core::naming::{card_image_filename, FALLBACK_IMAGE};
use cardsmith_core::pack::pack_rarities;
use cardsmith_core::prompt::{card_prompt, image_prompt};
use cardsmith_core::rarity::Rarity;
use cardsmith_core::sequence::next_set_and_number;
use cardsmith_db::models::card::CreateCard;
use cardsmith_openai::{retry, Generator, GeneratorError, RetryPolicy};

use crate::store::{CardStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum ArtworkError {
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error("failed to store artwork: {0}")]
    Io(#[from] std::io::Error),
}

/// Orchestrates card generation against a [`Generator`] and a [`CardStore`].
///
/// Text and image calls run under the retry policy; once retries are
/// exhausted the pipeline degrades to deterministic fallbacks instead of
/// failing, so a card is always produced.
pub struct CardPipeline<G> {
    generator: G,
    retry: RetryPolicy,
    image_dir: PathBuf,
}

impl<G: Generator> CardPipeline<G> {
    pub fn new(generator: G, image_dir: impl Into<PathBuf>) -> Self {
        Self {
            generator,
            retry: RetryPolicy::default(),
            image_dir: image_dir.into(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Generate one card and assign its (set, number) from the latest
    /// stored card. The caller persists the result.
    pub async fn generate_card(
        &self,
        store: &dyn CardStore,
        rarity: Option<Rarity>,
    ) -> Result<CreateCard, StoreError> {
        let draft = self.generate_draft(rarity).await;
        let latest = store.find_latest().await?;
        let last = latest
            .as_ref()
            .map(|card| (card.set_name.as_str(), card.card_number));
        let (set_name, card_number) = next_set_and_number(last);
        Ok(CreateCard::from_draft(draft, set_name, card_number))
    }

    /// Generate a full booster pack: one rare-or-mythic, three uncommons,
    /// six commons, each with artwork attached. Numbers continue from the
    /// latest stored card; the caller persists the batch.
    pub async fn open_pack(&self, store: &dyn CardStore) -> Result<Vec<CreateCard>, StoreError> {
        let rarities = pack_rarities(&mut rand::rng());

        let mut last = store
            .find_latest()
            .await?
            .map(|card| (card.set_name, card.card_number));

        let mut cards = Vec::with_capacity(rarities.len());
        for rarity in rarities {
            let draft = self.generate_draft(Some(rarity)).await;
            let (set_name, card_number) =
                next_set_and_number(last.as_ref().map(|(set, number)| (set.as_str(), *number)));
            let mut card = CreateCard::from_draft(draft, set_name, card_number);
            card.image_url = Some(self.generate_artwork(&card).await);
            last = Some((card.set_name.clone(), card.card_number));
            cards.push(card);
        }
        Ok(cards)
    }

    /// Generate artwork for a card and save it under the image directory.
    /// Returns the stored filename, or the fallback image on any failure.
    pub async fn generate_artwork(&self, card: &CreateCard) -> String {
        match self.try_generate_artwork(card).await {
            Ok(filename) => filename,
            Err(error) => {
                tracing::error!(
                    %error,
                    set_name = %card.set_name,
                    card_number = card.card_number,
                    "artwork generation failed, using fallback image"
                );
                FALLBACK_IMAGE.to_string()
            }
        }
    }

    /// Like [`generate_artwork`](Self::generate_artwork) but surfaces the
    /// failure, for callers that track artwork state.
    pub async fn try_generate_artwork(&self, card: &CreateCard) -> Result<String, ArtworkError> {
        let prompt = image_prompt(&card.name, &card.card_type, &card.color, &card.rarity);

        let url = retry(&self.retry, || self.generator.generate_image(&prompt)).await?;
        let bytes = retry(&self.retry, || self.generator.fetch_image(&url)).await?;

        let filename = card_image_filename(&card.set_name, card.card_number);
        tokio::fs::create_dir_all(&self.image_dir).await?;
        tokio::fs::write(self.image_dir.join(&filename), &bytes).await?;

        tracing::info!(%filename, "artwork stored");
        Ok(filename)
    }

    /// Produce a card draft from the text generator, or the deterministic
    /// fallback card when the service cannot deliver usable output.
    async fn generate_draft(&self, rarity: Option<Rarity>) -> CardData {
        let prompt = card_prompt(rarity);
        match retry(&self.retry, || self.text_attempt(&prompt)).await {
            Ok(raw) => CardData::from_normalized(&cardsmith_core::normalize::normalize(raw)),
            Err(error) => {
                tracing::error!(%error, "card generation failed, using fallback card");
                CardData::fallback(rarity)
            }
        }
    }

    async fn text_attempt(&self, prompt: &str) -> Result<serde_json::Value, GeneratorError> {
        let text = self.generator.generate_text(prompt).await?;
        serde_json::from_str(text.trim())
            .map_err(|e| GeneratorError::Parse(format!("response is not valid JSON: {e}")))
    }
}
