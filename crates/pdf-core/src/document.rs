//! PDF document wrapper

use crate::text::{
    encode_winansi_literal, generate_rect_operators, generate_text_operators, TextRenderContext,
};
use crate::{Align, FontData, PdfError, Result};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;
use std::path::Path;

/// RGB Color (values 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values 0.0 - 1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// White color
    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// PDF document wrapper providing overlay operations on an opened template
///
/// Text and rectangle operators are buffered per page and flushed into the
/// content streams once, at save time. The template file itself is never
/// mutated; serialization always produces a new byte sequence.
pub struct PdfDocument {
    /// The underlying lopdf document
    inner: Document,
    /// Embedded TrueType fonts by name
    fonts: HashMap<String, FontData>,
    /// Current font name
    current_font: Option<String>,
    /// Current font size
    current_font_size: f32,
    /// Current text color
    current_text_color: Color,
    /// Font objects written to the document (font name -> object ID)
    embedded_fonts: HashMap<String, ObjectId>,
    /// Page font resources (page number -> font name -> resource name)
    page_font_resources: HashMap<usize, HashMap<String, String>>,
    /// Next font resource number
    next_font_resource: u32,
    /// Object ID of the built-in base font, created on first use
    base_font_id: Option<ObjectId>,
    /// Buffered content operators per page
    page_content_buffer: HashMap<usize, Vec<u8>>,
}

impl PdfDocument {
    /// Name of the built-in Helvetica base font
    ///
    /// Always available without `add_font`; text drawn with it is encoded
    /// as WinAnsi literal strings and the font is not embedded.
    pub const BASE_FONT: &'static str = "helvetica";

    fn from_inner(inner: Document) -> Self {
        Self {
            inner,
            fonts: HashMap::new(),
            current_font: None,
            current_font_size: 12.0,
            current_text_color: Color::default(),
            embedded_fonts: HashMap::new(),
            page_font_resources: HashMap::new(),
            next_font_resource: 1,
            base_font_id: None,
            page_content_buffer: HashMap::new(),
        }
    }

    /// Open a PDF document from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let inner = Document::load(path).map_err(|e| PdfError::OpenError(e.to_string()))?;
        Ok(Self::from_inner(inner))
    }

    /// Open a PDF document from bytes
    pub fn open_from_bytes(data: &[u8]) -> Result<Self> {
        let inner = Document::load_mem(data).map_err(|e| PdfError::OpenError(e.to_string()))?;
        Ok(Self::from_inner(inner))
    }

    /// Number of pages in the document
    pub fn page_count(&self) -> usize {
        self.inner.get_pages().len()
    }

    /// Add a TrueType font to the document
    ///
    /// # Arguments
    /// * `name` - Font identifier (used in `set_font`)
    /// * `ttf_data` - TrueType font file bytes
    pub fn add_font(&mut self, name: &str, ttf_data: &[u8]) -> Result<()> {
        if name == Self::BASE_FONT || self.fonts.contains_key(name) {
            return Err(PdfError::FontAlreadyExists(name.to_string()));
        }

        let font_data = FontData::from_ttf(name, ttf_data)?;
        self.fonts.insert(name.to_string(), font_data);

        Ok(())
    }

    /// Check whether a font has been added under this name
    pub fn has_font(&self, name: &str) -> bool {
        self.fonts.contains_key(name)
    }

    /// Set the current font and size
    ///
    /// Accepts any font registered with `add_font`, or [`Self::BASE_FONT`].
    pub fn set_font(&mut self, name: &str, size: f32) -> Result<()> {
        if name != Self::BASE_FONT && !self.fonts.contains_key(name) {
            return Err(PdfError::FontNotFound(name.to_string()));
        }

        self.current_font = Some(name.to_string());
        self.current_font_size = size;

        Ok(())
    }

    /// Set the text color
    pub fn set_text_color(&mut self, color: Color) {
        self.current_text_color = color;
    }

    /// Insert text at a position using the current font
    ///
    /// # Arguments
    /// * `text` - Text to insert
    /// * `page` - Page number (1-indexed)
    /// * `x` - X coordinate in points
    /// * `y` - Y coordinate in points (from top)
    /// * `align` - Text alignment
    pub fn insert_text(&mut self, text: &str, page: usize, x: f64, y: f64, align: Align) -> Result<()> {
        let page_count = self.page_count();
        if page == 0 || page > page_count {
            return Err(PdfError::InvalidPage(page, page_count));
        }

        if text.is_empty() {
            return Ok(());
        }

        let font_name = self
            .current_font
            .clone()
            .ok_or_else(|| PdfError::FontNotFound("No font set".to_string()))?;

        if font_name == Self::BASE_FONT {
            let size = self.current_font_size;
            return self.insert_text_base(text, page, x, y, size);
        }

        // Track used characters, then encode with the font's glyph IDs
        let (text_hex, text_width) = {
            let font_data = self
                .fonts
                .get_mut(&font_name)
                .ok_or_else(|| PdfError::FontNotFound(font_name.clone()))?;
            font_data.add_chars(text);
            (
                font_data.encode_text_hex(text),
                font_data.text_width_points(text, self.current_font_size) as f64,
            )
        };

        let font_resource_name = self.get_or_create_font_ref(&font_name, page);

        let page_height = self.get_page_height(page)?;
        let pdf_y = page_height - y;

        let ctx = TextRenderContext {
            font_name: font_resource_name,
            font_size: self.current_font_size,
            text_width,
            color: self.current_text_color,
        };
        let operators = generate_text_operators(&text_hex, x, pdf_y, align, &ctx);
        self.buffer_content(page, &operators);

        Ok(())
    }

    /// Insert text using the built-in Helvetica base font
    ///
    /// The base font is never embedded; text is written as a WinAnsi literal
    /// string with unmappable characters replaced by `?`. Always left-aligned
    /// at the insertion point.
    ///
    /// # Arguments
    /// * `text` - Text to insert
    /// * `page` - Page number (1-indexed)
    /// * `x` - X coordinate in points
    /// * `y` - Y coordinate in points (from top)
    /// * `size` - Font size in points
    pub fn insert_text_base(
        &mut self,
        text: &str,
        page: usize,
        x: f64,
        y: f64,
        size: f32,
    ) -> Result<()> {
        let page_count = self.page_count();
        if page == 0 || page > page_count {
            return Err(PdfError::InvalidPage(page, page_count));
        }

        if text.is_empty() {
            return Ok(());
        }

        self.ensure_base_font();
        let font_resource_name = self.get_or_create_font_ref(Self::BASE_FONT, page);

        let page_height = self.get_page_height(page)?;
        let pdf_y = page_height - y;

        let ctx = TextRenderContext {
            font_name: font_resource_name,
            font_size: size,
            text_width: 0.0,
            color: self.current_text_color,
        };
        let literal = encode_winansi_literal(text);
        let operators = generate_text_operators(&literal, x, pdf_y, Align::Left, &ctx);
        self.buffer_content(page, &operators);

        Ok(())
    }

    /// Draw an opaque filled rectangle
    ///
    /// Later draws stack on top of earlier ones, so a white fill here
    /// obscures anything already on the page in that region.
    ///
    /// # Arguments
    /// * `page` - Page number (1-indexed)
    /// * `x` - X coordinate of the top-left corner in points
    /// * `y` - Y coordinate of the top-left corner in points (from top)
    /// * `width`, `height` - Rectangle size in points
    /// * `color` - Fill color
    pub fn fill_rect(
        &mut self,
        page: usize,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    ) -> Result<()> {
        let page_count = self.page_count();
        if page == 0 || page > page_count {
            return Err(PdfError::InvalidPage(page, page_count));
        }

        let page_height = self.get_page_height(page)?;
        let pdf_y = page_height - y - height;

        let operators = generate_rect_operators(x, pdf_y, width, height, color);
        self.buffer_content(page, &operators);

        Ok(())
    }

    /// Save the document to a file
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.finish()?;
        self.inner
            .save(path)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;
        Ok(())
    }

    /// Save the document to bytes
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        self.finish()?;

        let mut buffer = Vec::new();
        self.inner
            .save_to(&mut buffer)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;

        Ok(buffer)
    }

    /// Embed fonts, flush buffered content, and compress streams
    fn finish(&mut self) -> Result<()> {
        self.embed_fonts()?;
        self.flush_content_buffers()?;
        self.finalize_page_font_resources()?;
        self.inner.compress();
        Ok(())
    }

    /// Create the base font object on first use
    fn ensure_base_font(&mut self) -> ObjectId {
        if let Some(id) = self.base_font_id {
            return id;
        }

        let font_dict = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        };
        let id = self.inner.add_object(Object::Dictionary(font_dict));
        self.base_font_id = Some(id);
        self.embedded_fonts.insert(Self::BASE_FONT.to_string(), id);
        id
    }

    /// Get or create a font resource name (e.g., "F1") for a page
    fn get_or_create_font_ref(&mut self, font_name: &str, page: usize) -> String {
        let page_resources = self.page_font_resources.entry(page).or_default();

        if let Some(resource_name) = page_resources.get(font_name) {
            return resource_name.clone();
        }

        let resource_name = format!("F{}", self.next_font_resource);
        self.next_font_resource += 1;
        page_resources.insert(font_name.to_string(), resource_name.clone());

        resource_name
    }

    /// Write font objects for every font that was actually used
    fn embed_fonts(&mut self) -> Result<()> {
        let mut font_names: Vec<String> = self
            .fonts
            .iter()
            .filter(|(_, data)| !data.used_chars.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        font_names.sort();

        for font_name in font_names {
            if self.embedded_fonts.contains_key(&font_name) {
                continue;
            }
            self.embed_font_object(&font_name)?;
        }

        Ok(())
    }

    /// Embed a single font as Type0/CIDFontType2 with its support objects
    fn embed_font_object(&mut self, font_name: &str) -> Result<ObjectId> {
        let font_data = self
            .fonts
            .get(font_name)
            .ok_or_else(|| PdfError::FontNotFound(font_name.to_string()))?;

        let font_objects = font_data.to_pdf_objects()?;

        let font_file_id = self.inner.add_object(font_objects.font_file_stream);

        let mut font_descriptor = font_objects.font_descriptor;
        font_descriptor.set("FontFile2", Object::Reference(font_file_id));
        let font_descriptor_id = self.inner.add_object(font_descriptor);

        let mut cid_font = font_objects.cid_font;
        cid_font.set("FontDescriptor", Object::Reference(font_descriptor_id));
        let cid_font_id = self.inner.add_object(cid_font);

        let tounicode_id = self.inner.add_object(font_objects.tounicode_stream);

        let mut type0_font = font_objects.type0_font;
        type0_font.set(
            "DescendantFonts",
            Object::Array(vec![Object::Reference(cid_font_id)]),
        );
        type0_font.set("ToUnicode", Object::Reference(tounicode_id));
        let type0_font_id = self.inner.add_object(type0_font);

        self.embedded_fonts
            .insert(font_name.to_string(), type0_font_id);

        Ok(type0_font_id)
    }

    /// Add font references to the Resources of every page that used them
    fn finalize_page_font_resources(&mut self) -> Result<()> {
        let page_resources: Vec<(usize, Vec<(String, String)>)> = self
            .page_font_resources
            .iter()
            .map(|(&page, fonts)| {
                let font_list: Vec<_> = fonts
                    .iter()
                    .map(|(name, resource)| (name.clone(), resource.clone()))
                    .collect();
                (page, font_list)
            })
            .collect();

        for (page, fonts) in page_resources {
            if !fonts.is_empty() {
                self.add_fonts_to_page_resources(page, &fonts)?;
            }
        }

        Ok(())
    }

    /// Add font references to a page's Resources dictionary
    fn add_fonts_to_page_resources(&mut self, page: usize, fonts: &[(String, String)]) -> Result<()> {
        let pages = self.inner.get_pages();
        let page_id = *pages
            .get(&(page as u32))
            .ok_or(PdfError::InvalidPage(page, pages.len()))?;

        let page_obj = self.inner.get_object(page_id)?;
        let page_dict = page_obj
            .as_dict()
            .map_err(|_| PdfError::SaveError("Page object is not a dictionary".to_string()))?;

        let mut resources_dict = match page_dict.get(b"Resources") {
            Ok(resources) => match resources.as_dict() {
                Ok(dict) => dict.clone(),
                Err(_) => Dictionary::new(),
            },
            Err(_) => Dictionary::new(),
        };

        let mut font_dict = match resources_dict.get(b"Font") {
            Ok(font) => match font.as_dict() {
                Ok(dict) => dict.clone(),
                Err(_) => Dictionary::new(),
            },
            Err(_) => Dictionary::new(),
        };

        for (font_name, resource_name) in fonts {
            let font_ref = self
                .embedded_fonts
                .get(font_name)
                .ok_or_else(|| PdfError::FontNotFound(font_name.to_string()))?;
            font_dict.set(resource_name.as_bytes(), Object::Reference(*font_ref));
        }

        resources_dict.set(b"Font", Object::Dictionary(font_dict));

        let mut new_page_dict = page_dict.clone();
        new_page_dict.set(b"Resources", Object::Dictionary(resources_dict));
        self.inner.objects.insert(page_id, new_page_dict.into());

        Ok(())
    }

    /// Get page height in points from the MediaBox (or CropBox)
    fn get_page_height(&self, page: usize) -> Result<f64> {
        let pages = self.inner.get_pages();
        let page_id = *pages
            .get(&(page as u32))
            .ok_or(PdfError::InvalidPage(page, pages.len()))?;

        let media_box = self.get_inherited_media_box(page_id)?;
        self.extract_height_from_media_box(&media_box)
    }

    /// Get MediaBox, following the parent inheritance chain if needed
    fn get_inherited_media_box(&self, page_id: ObjectId) -> Result<Vec<Object>> {
        let mut current_id = page_id;

        // Follow parent chain up to 10 levels (safety limit)
        for _ in 0..10 {
            let obj = self.inner.get_object(current_id)?;
            let dict = obj
                .as_dict()
                .map_err(|_| PdfError::ParseError("Object is not a dictionary".to_string()))?;

            if let Ok(media_box) = dict.get(b"MediaBox").or_else(|_| dict.get(b"CropBox")) {
                let media_box_array = match media_box {
                    Object::Array(arr) => arr.clone(),
                    Object::Reference(ref_id) => {
                        let referred = self.inner.get_object(*ref_id)?;
                        referred
                            .as_array()
                            .map_err(|_| {
                                PdfError::ParseError(
                                    "MediaBox reference is not an array".to_string(),
                                )
                            })?
                            .clone()
                    }
                    _ => return Err(PdfError::ParseError("MediaBox is not an array".to_string())),
                };
                return Ok(media_box_array);
            }

            if let Ok(Object::Reference(parent_id)) = dict.get(b"Parent") {
                current_id = *parent_id;
                continue;
            }

            break;
        }

        // Fallback: US Letter, the size of the visa form template
        Ok(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(612.0),
            Object::Real(792.0),
        ])
    }

    /// Extract height from a MediaBox array
    fn extract_height_from_media_box(&self, media_box_array: &[Object]) -> Result<f64> {
        if media_box_array.len() >= 4 {
            let y1 = media_box_array[1]
                .as_f32()
                .map(|v| v as f64)
                .ok()
                .or_else(|| media_box_array[1].as_i64().ok().map(|v| v as f64))
                .ok_or_else(|| PdfError::ParseError("Invalid MediaBox y1".to_string()))?;
            let y2 = media_box_array[3]
                .as_f32()
                .map(|v| v as f64)
                .ok()
                .or_else(|| media_box_array[3].as_i64().ok().map(|v| v as f64))
                .ok_or_else(|| PdfError::ParseError("Invalid MediaBox y2".to_string()))?;
            return Ok(y2 - y1);
        }

        Err(PdfError::ParseError("Invalid MediaBox format".to_string()))
    }

    /// Buffer content operators for a page (written at save time)
    fn buffer_content(&mut self, page: usize, content: &[u8]) {
        self.page_content_buffer
            .entry(page)
            .or_default()
            .extend_from_slice(content);
    }

    /// Flush all buffered content to page streams
    fn flush_content_buffers(&mut self) -> Result<()> {
        let mut buffers: Vec<(usize, Vec<u8>)> = self.page_content_buffer.drain().collect();
        buffers.sort_by_key(|(page, _)| *page);

        for (page, content) in buffers {
            if !content.is_empty() {
                self.append_to_content_stream(page, &content)?;
            }
        }

        Ok(())
    }

    /// Append operators to a page's content stream
    ///
    /// Existing streams (single, referenced, or arrays of streams) are read
    /// back and decompressed, the new operators appended, and a single new
    /// stream object written in their place.
    fn append_to_content_stream(&mut self, page: usize, content: &[u8]) -> Result<()> {
        let pages = self.inner.get_pages();
        let page_id = *pages
            .get(&(page as u32))
            .ok_or(PdfError::InvalidPage(page, pages.len()))?;

        let (existing_content, page_dict_clone) = {
            let page_obj = self.inner.get_object(page_id)?;
            let page_dict = page_obj
                .as_dict()
                .map_err(|_| PdfError::ParseError("Page object is not a dictionary".to_string()))?;

            let page_dict_clone = page_dict.clone();

            let existing_content = match page_dict.get(b"Contents") {
                Ok(contents) => match contents {
                    Object::Stream(stream) => stream
                        .decompressed_content()
                        .unwrap_or_else(|_| stream.content.clone()),
                    Object::Reference(ref_id) => {
                        if let Ok(Object::Stream(stream)) = self.inner.get_object(*ref_id) {
                            stream
                                .decompressed_content()
                                .unwrap_or_else(|_| stream.content.clone())
                        } else {
                            Vec::new()
                        }
                    }
                    Object::Array(arr) => {
                        let mut combined = Vec::new();
                        for obj in arr {
                            let stream = match obj {
                                Object::Reference(ref_id) => {
                                    match self.inner.get_object(*ref_id) {
                                        Ok(Object::Stream(stream)) => Some(stream),
                                        _ => None,
                                    }
                                }
                                Object::Stream(stream) => Some(stream),
                                _ => None,
                            };
                            if let Some(stream) = stream {
                                let data = stream
                                    .decompressed_content()
                                    .unwrap_or_else(|_| stream.content.clone());
                                combined.extend_from_slice(&data);
                                // Streams in an array are implicitly separated
                                combined.push(b'\n');
                            }
                        }
                        combined
                    }
                    _ => Vec::new(),
                },
                Err(_) => Vec::new(),
            };

            (existing_content, page_dict_clone)
        };

        let mut new_content = existing_content;
        if !new_content.is_empty() && !new_content.ends_with(b"\n") {
            new_content.push(b'\n');
        }
        new_content.extend_from_slice(content);

        let new_stream = Stream::new(Dictionary::new(), new_content);
        let stream_id = self.inner.add_object(new_stream);

        let mut new_page_dict = page_dict_clone;
        new_page_dict.set(b"Contents", Object::Reference(stream_id));
        self.inner.objects.insert(page_id, new_page_dict.into());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_defaults() {
        assert_eq!(Color::default(), Color::black());
        assert_eq!(Color::white(), Color::rgb(1.0, 1.0, 1.0));
    }
}
