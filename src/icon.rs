//! Icon types: validated edge lengths, rendered images and image sets.
//!
//! Every icon is square, so a single edge length identifies it. Output file
//! names follow the `icon-{size}x{size}.png` convention used by web app
//! manifests.

use std::fmt;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::error::{Error, Result};

/// The icon sizes generated by default, in ascending order.
pub const DEFAULT_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

/// A validated icon edge length in pixels.
///
/// Below [`IconSize::MIN`] the crosshair arms would shrink under one pixel,
/// so such sizes are rejected instead of drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IconSize(u32);

impl IconSize {
    /// Smallest edge length at which every feature spans at least a pixel.
    ///
    /// Each crosshair arm runs from the padding to the ball's padded edge, a
    /// length of `edge / 30`; the ball radius is already 8 px at this size.
    pub const MIN: u32 = 30;

    /// Validates an edge length.
    pub fn new(edge: u32) -> Result<Self> {
        if edge < Self::MIN {
            return Err(Error::InvalidSize {
                size: edge,
                min: Self::MIN,
            });
        }
        Ok(Self(edge))
    }

    /// Returns the edge length in pixels.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Returns the conventional file name, e.g. `icon-72x72.png`.
    pub fn file_name(self) -> String {
        format!("icon-{0}x{0}.png", self.0)
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.0)
    }
}

impl TryFrom<u32> for IconSize {
    type Error = Error;

    fn try_from(edge: u32) -> Result<Self> {
        Self::new(edge)
    }
}

/// A single rendered icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    /// The image data in straight (non-premultiplied) RGBA format.
    pub data: RgbaImage,

    /// The edge length this icon was rendered at.
    pub size: IconSize,
}

impl IconImage {
    pub fn new(data: RgbaImage, size: IconSize) -> Self {
        Self { data, size }
    }

    /// Returns the pixel dimensions of the image.
    pub fn dimensions(&self) -> (u32, u32) {
        self.data.dimensions()
    }

    /// Returns the conventional file name for this icon.
    pub fn file_name(&self) -> String {
        self.size.file_name()
    }

    /// Encodes the icon as PNG into `dir`, returning the written path.
    ///
    /// The directory must already exist.
    pub fn save_png(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name());
        self.data
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|source| Error::Encode {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }
}

/// A collection of rendered icons, one per size.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IconSet {
    pub images: Vec<IconImage>,
}

impl IconSet {
    /// Creates a new empty icon set.
    pub fn new() -> Self {
        Self { images: Vec::new() }
    }

    /// Adds an image to the icon set.
    pub fn add_image(&mut self, image: IconImage) {
        self.images.push(image);
    }

    /// Returns the number of images in the set.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns true if the icon set contains no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Finds the image rendered at exactly `edge` pixels.
    pub fn find_by_size(&self, edge: u32) -> Option<&IconImage> {
        self.images.iter().find(|img| img.size.get() == edge)
    }

    /// Returns an iterator over the icon images.
    pub fn iter(&self) -> impl Iterator<Item = &IconImage> {
        self.images.iter()
    }
}

impl IntoIterator for IconSet {
    type Item = IconImage;
    type IntoIter = std::vec::IntoIter<IconImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.into_iter()
    }
}

impl<'a> IntoIterator for &'a IconSet {
    type Item = &'a IconImage;
    type IntoIter = std::slice::Iter<'a, IconImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}
