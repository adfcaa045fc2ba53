use serde::{Deserialize, Serialize};

use crate::core::Orientation;

/// Interaction mode selected for pointer drags on the plot or an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ZoomGestureType {
    RubberbandZoom,
    DynamicZoom,
    HorizontalZoom,
    VerticalZoom,
    ZoomIn,
    ZoomOut,
    ZoomInHorizontal,
    ZoomOutHorizontal,
    ZoomInVertical,
    ZoomOutVertical,
    Panning,
    #[default]
    None,
}

/// Behavioural flags carried by each gesture type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureFlags {
    pub valid_on_horizontal: bool,
    pub valid_on_vertical: bool,
    pub is_zoom: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Press-and-hold zoom parameters of the zoom-in/out family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoomStep {
    pub direction: ZoomDirection,
    pub horizontal: bool,
    pub vertical: bool,
}

impl ZoomStep {
    /// Signed factor for [`crate::core::AxisRangeController::zoom_around_point`].
    #[must_use]
    pub fn factor(self, zoom_ratio: f64) -> f64 {
        match self.direction {
            ZoomDirection::In => zoom_ratio,
            ZoomDirection::Out => -zoom_ratio,
        }
    }

    #[must_use]
    pub fn applies_to(self, orientation: Orientation) -> bool {
        match orientation {
            Orientation::Horizontal => self.horizontal,
            Orientation::Vertical => self.vertical,
        }
    }
}

impl ZoomGestureType {
    pub const ALL: [Self; 12] = [
        Self::RubberbandZoom,
        Self::DynamicZoom,
        Self::HorizontalZoom,
        Self::VerticalZoom,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::ZoomInHorizontal,
        Self::ZoomOutHorizontal,
        Self::ZoomInVertical,
        Self::ZoomOutVertical,
        Self::Panning,
        Self::None,
    ];

    #[must_use]
    pub const fn flags(self) -> GestureFlags {
        let (valid_on_horizontal, valid_on_vertical, is_zoom) = match self {
            Self::RubberbandZoom | Self::DynamicZoom | Self::ZoomIn | Self::ZoomOut => {
                (true, true, true)
            }
            Self::HorizontalZoom | Self::ZoomInHorizontal | Self::ZoomOutHorizontal => {
                (true, false, true)
            }
            Self::VerticalZoom | Self::ZoomInVertical | Self::ZoomOutVertical => {
                (false, true, true)
            }
            Self::Panning => (true, true, false),
            Self::None => (false, false, false),
        };
        GestureFlags {
            valid_on_horizontal,
            valid_on_vertical,
            is_zoom,
        }
    }

    #[must_use]
    pub const fn is_zoom(self) -> bool {
        self.flags().is_zoom
    }

    /// Whether this gesture may be started on an axis ruler of `orientation`.
    #[must_use]
    pub const fn is_valid_on(self, orientation: Orientation) -> bool {
        let flags = self.flags();
        match orientation {
            Orientation::Horizontal => flags.valid_on_horizontal,
            Orientation::Vertical => flags.valid_on_vertical,
        }
    }

    /// Gestures that commit the interval between press and release pixels.
    #[must_use]
    pub const fn is_interval_zoom(self) -> bool {
        matches!(
            self,
            Self::RubberbandZoom | Self::DynamicZoom | Self::HorizontalZoom | Self::VerticalZoom
        )
    }

    /// Press-and-hold zoom parameters, `None` outside the zoom-in/out family.
    #[must_use]
    pub const fn zoom_step(self) -> Option<ZoomStep> {
        let (direction, horizontal, vertical) = match self {
            Self::ZoomIn => (ZoomDirection::In, true, true),
            Self::ZoomOut => (ZoomDirection::Out, true, true),
            Self::ZoomInHorizontal => (ZoomDirection::In, true, false),
            Self::ZoomOutHorizontal => (ZoomDirection::Out, true, false),
            Self::ZoomInVertical => (ZoomDirection::In, false, true),
            Self::ZoomOutVertical => (ZoomDirection::Out, false, true),
            _ => return None,
        };
        Some(ZoomStep {
            direction,
            horizontal,
            vertical,
        })
    }

    /// Whether an interval commit of this gesture touches axes of `orientation`.
    #[must_use]
    pub const fn commits_on(self, orientation: Orientation) -> bool {
        match self {
            Self::RubberbandZoom | Self::DynamicZoom => true,
            Self::HorizontalZoom => matches!(orientation, Orientation::Horizontal),
            Self::VerticalZoom => matches!(orientation, Orientation::Vertical),
            _ => false,
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::RubberbandZoom => "Rubberband Zoom",
            Self::DynamicZoom => "Dynamic Zoom",
            Self::HorizontalZoom => "Horizontal Zoom",
            Self::VerticalZoom => "Vertical Zoom",
            Self::ZoomIn => "Zoom In",
            Self::ZoomOut => "Zoom Out",
            Self::ZoomInHorizontal => "Zoom In Horizontally",
            Self::ZoomOutHorizontal => "Zoom Out Horizontally",
            Self::ZoomInVertical => "Zoom In Vertically",
            Self::ZoomOutVertical => "Zoom Out Vertically",
            Self::Panning => "Panning",
            Self::None => "None",
        }
    }
}

impl std::fmt::Display for ZoomGestureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
