//! Host image buffer

/// Channel layout of the pixel data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgba,
    Bgra,
}

/// Component type of the pixel data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    UnsignedByte,
}

impl DataType {
    pub fn size_in_bytes(self) -> usize {
        match self {
            DataType::UnsignedByte => 1,
        }
    }
}

/// An image returned to the host, usable as a texture
///
/// Rows are stored bottom-up, as texture uploads expect.
#[derive(Debug, Clone)]
pub struct Image {
    width: u32,
    height: u32,
    depth: u32,
    internal_format: PixelFormat,
    pixel_format: PixelFormat,
    data_type: DataType,
    data: Vec<u8>,
    file_name: String,
}

impl Image {
    /// Allocate a zero-filled single-slice image with 4 unsigned bytes per pixel
    ///
    /// Returns `None` when the buffer size does not fit in memory addressing.
    pub fn allocate(width: u32, height: u32, internal_format: PixelFormat) -> Option<Self> {
        let data_type = DataType::UnsignedByte;
        let len = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4 * data_type.size_in_bytes())?;
        Some(Self {
            width,
            height,
            depth: 1,
            internal_format,
            pixel_format: internal_format,
            data_type,
            data: vec![0; len],
            file_name: String::new(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn internal_format(&self) -> PixelFormat {
        self.internal_format
    }

    pub fn pixel_format(&self) -> PixelFormat {
        self.pixel_format
    }

    /// Reinterpret the channel order of the existing data without touching it
    pub fn set_pixel_format(&mut self, format: PixelFormat) {
        self.pixel_format = format;
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn row_size_in_bytes(&self) -> usize {
        self.width as usize * 4 * self.data_type.size_in_bytes()
    }

    pub fn total_size_in_bytes(&self) -> usize {
        self.row_size_in_bytes() * self.height as usize * self.depth as usize
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn set_file_name(&mut self, file_name: impl Into<String>) {
        self.file_name = file_name.into();
    }

    /// Zero every byte of the pixel data
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Swap rows top to bottom in place
    pub fn flip_vertical(&mut self) {
        let row = self.row_size_in_bytes();
        let height = self.height as usize;
        if row == 0 || height < 2 {
            return;
        }

        for y in 0..height / 2 {
            let (upper, lower) = self.data.split_at_mut((height - 1 - y) * row);
            upper[y * row..(y + 1) * row].swap_with_slice(&mut lower[..row]);
        }
    }

    /// The four channel bytes at `(x, y)`, in `pixel_format` order
    ///
    /// Returns `None` when the coordinate is outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = y as usize * self.row_size_in_bytes() + x as usize * 4;
        let px = &self.data[offset..offset + 4];
        Some([px[0], px[1], px[2], px[3]])
    }
}
