//! Turn one configured mount point into a live slider.

use anyhow::anyhow;
use range_core::{
    fixed_bound_labels, FixedDomain, FixedRangeController, PayloadError, RangeController,
    RangeMode,
};
use web_sys as web;

use crate::config::{MountConfig, ValueSource};
use crate::fetch;
use crate::layout;
use crate::slider::{self, Chrome, Slider};

pub async fn mount(root: web::Element, config: MountConfig) -> anyhow::Result<()> {
    let document = root
        .owner_document()
        .ok_or_else(|| anyhow!("mount point has no document"))?;
    layout::show_loading(&document, &root)?;
    match config.mode {
        RangeMode::Normal => mount_normal(&document, &root, &config).await,
        RangeMode::Fixed => mount_fixed(&document, &root, &config).await,
    }
}

fn wrong_source(mode: RangeMode) -> PayloadError {
    PayloadError::InvalidValues(format!("values source does not fit a {} slider", mode))
}

async fn load_range(config: &MountConfig) -> Result<RangeController, PayloadError> {
    let values = match &config.source {
        ValueSource::InlineRange(values) => *values,
        ValueSource::Remote(url) => fetch::fetch_range_values(url).await?,
        ValueSource::InlineFixed(_) => return Err(wrong_source(RangeMode::Normal)),
    };
    let domain = values.into_domain(config.step)?;
    RangeController::new(domain, config.min_gap)
        .map_err(|e| PayloadError::InvalidValues(e.to_string()))
}

async fn load_fixed(config: &MountConfig) -> Result<Option<FixedDomain>, PayloadError> {
    match &config.source {
        ValueSource::InlineFixed(values) if values.is_empty() => Ok(None),
        ValueSource::InlineFixed(values) => FixedDomain::new(values.clone())
            .map(Some)
            .map_err(|e| PayloadError::InvalidValues(e.to_string())),
        ValueSource::Remote(url) => fetch::fetch_fixed_values(url).await?.into_domain(),
        ValueSource::InlineRange(_) => Err(wrong_source(RangeMode::Fixed)),
    }
}

async fn mount_normal(
    document: &web::Document,
    root: &web::Element,
    config: &MountConfig,
) -> anyhow::Result<()> {
    let controller = match load_range(config).await {
        Ok(c) => c,
        Err(e) => {
            log::error!("[mount] normal slider: {}", e);
            return layout::show_error(document, root, e.user_message(RangeMode::Normal));
        }
    };
    let content = layout::show_content(document, root, &config.title, &config.subtitle)?;
    let domain = *controller.domain();
    Slider::mount(
        document,
        &content,
        controller,
        Chrome::Inputs { step: config.step },
    )?;
    log::info!(
        "[mount] normal slider {}..{} step {}",
        domain.min(),
        domain.max(),
        domain.step()
    );
    Ok(())
}

async fn mount_fixed(
    document: &web::Document,
    root: &web::Element,
    config: &MountConfig,
) -> anyhow::Result<()> {
    let domain = match load_fixed(config).await {
        Ok(d) => d,
        Err(e) => {
            log::error!("[mount] fixed slider: {}", e);
            return layout::show_error(document, root, e.user_message(RangeMode::Fixed));
        }
    };
    let content = layout::show_content(document, root, &config.title, &config.subtitle)?;
    match domain {
        Some(domain) => {
            let count = domain.len();
            Slider::mount(document, &content, FixedRangeController::new(domain), Chrome::Markers)?;
            log::info!("[mount] fixed slider with {} values", count);
        }
        None => {
            log::warn!("[mount] fixed slider has no values");
            slider::mount_placeholder(document, &content, &fixed_bound_labels(None))?;
        }
    }
    Ok(())
}
