//! Paged 7x4 grid of headshots that pop in on a spring.

use super::StyleCtx;
use crate::animation::spring::{SpringConfig, spring};
use crate::composition::roster::StaffMember;
use crate::foundation::core::{Fps, FrameIndex, Rect, Size, Transform2D};
use crate::scene::layer::{ImageFit, Layer, TextStyle};

pub const COLS: usize = 7;
pub const ROWS: usize = 4;
pub const PAGE_SIZE: usize = COLS * ROWS;
/// Fade-out before a page is replaced, in seconds.
pub const PAGE_FADE_SECS: f64 = 0.5;

const NAME_PX: f64 = 14.0;
const NAME_GAP: f64 = 4.0;
const NAME_LINE: f64 = 18.0;

/// Page shown at a given time plus its timing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageState {
    pub page: usize,
    pub pages: usize,
    /// Global start of the page in content-local seconds.
    pub start_secs: f64,
    /// Seconds since the page started.
    pub elapsed: f64,
    /// Group opacity; only non-final pages fade out.
    pub opacity: f64,
}

pub fn page_state(t: f64, per: f64, len: usize) -> PageState {
    let pages = len.div_ceil(PAGE_SIZE).max(1);
    let page_secs = PAGE_SIZE as f64 * per;
    let raw = (t / page_secs).floor();
    let page = if raw.is_finite() && raw > 0.0 {
        (raw as usize).min(pages - 1)
    } else {
        0
    };
    let start_secs = page as f64 * page_secs;
    let until_end = start_secs + page_secs - t;
    let opacity = if page + 1 < pages && until_end < PAGE_FADE_SECS {
        (until_end / PAGE_FADE_SECS).clamp(0.0, 1.0)
    } else {
        1.0
    };
    PageState {
        page,
        pages,
        start_secs,
        elapsed: t - start_secs,
        opacity,
    }
}

/// Pop-in scale of slot `slot` on `page`; zero until the slot's appear time.
pub fn cell_scale(page: &PageState, slot: usize, per: f64, local_frame: FrameIndex, fps: Fps) -> f64 {
    let appear = slot as f64 * per;
    if page.elapsed < appear {
        return 0.0;
    }
    let release = fps.secs_to_frames_round(page.start_secs + appear);
    spring(local_frame.0.saturating_sub(release), fps, SpringConfig::POP)
}

/// Geometry shared by every grid cell in a `area`-sized photo area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellMetrics {
    pub cell: Size,
    pub image: f64,
}

impl CellMetrics {
    pub fn for_area(area: Size) -> Self {
        let cell = Size::new(area.width / COLS as f64, area.height / ROWS as f64);
        Self {
            cell,
            image: (cell.width - 16.0).min(cell.height - 40.0).max(0.0),
        }
    }

    fn slot_rect(&self, slot: usize) -> Rect {
        let col = (slot % COLS) as f64;
        let row = (slot / COLS) as f64;
        Rect::from_origin_size(
            (col * self.cell.width, row * self.cell.height),
            self.cell,
        )
    }
}

pub fn render(ctx: &StyleCtx<'_>) -> Vec<Layer> {
    let Some(per) = ctx.per_photo_secs() else {
        return Vec::new();
    };
    let t = ctx.time();
    let state = page_state(t, per, ctx.roster.len());
    let metrics = CellMetrics::for_area(ctx.area().size());

    let first = state.page * PAGE_SIZE;
    let members = ctx.roster.iter().skip(first).take(PAGE_SIZE);
    let id = format!("grid/page{}", state.page);
    let cells = members
        .enumerate()
        .map(|(slot, member)| {
            let scale = cell_scale(&state, slot, per, ctx.local_frame, ctx.fps());
            cell_layer(&format!("{id}/cell{slot}"), member, &metrics, slot)
                .with_transform(Transform2D::centered(metrics.cell).with_uniform_scale(scale))
        })
        .collect();

    vec![Layer::group(id.as_str(), ctx.area(), cells).with_opacity(state.opacity)]
}

/// Headshot centered in its cell with the name on the line beneath.
pub(crate) fn cell_layer(id: &str, member: &StaffMember, metrics: &CellMetrics, slot: usize) -> Layer {
    let cell = metrics.cell;
    let stack_h = metrics.image + NAME_GAP + NAME_LINE;
    let image_x = (cell.width - metrics.image) / 2.0;
    let image_y = (cell.height - stack_h) / 2.0;
    let name_y = image_y + metrics.image + NAME_GAP;

    Layer::group(
        id,
        metrics.slot_rect(slot),
        vec![
            Layer::image(
                format!("{id}/photo"),
                Rect::new(image_x, image_y, image_x + metrics.image, image_y + metrics.image),
                member.image.as_str(),
                ImageFit::Cover,
            )
            .with_corner_radius(6.0),
            Layer::text(
                format!("{id}/name"),
                Rect::new(4.0, name_y, cell.width - 4.0, name_y + NAME_LINE),
                member.name.as_str(),
                TextStyle::new(NAME_PX, [255, 255, 255, 255])
                    .bold()
                    .family("Arial, sans-serif")
                    .ellipsize(),
            ),
        ],
    )
}

#[cfg(test)]
#[path = "../../tests/unit/styles/grid.rs"]
mod tests;
