//! Enumerated configuration values accepted by the PDFreactor Web Service.
//!
//! The configuration payload is an open JSON object; these namespaces are a
//! typed vocabulary for its well-known option values, carrying no behavior.
//! Example: `config.with("logLevel", LogLevel::DEBUG)`.

pub struct CallbackType;
impl CallbackType {
    pub const FINISH: &'static str = "FINISH";
    pub const PROGRESS: &'static str = "PROGRESS";
    pub const START: &'static str = "START";
}

pub struct Cleanup;
impl Cleanup {
    pub const CYBERNEKO: &'static str = "CYBERNEKO";
    pub const JTIDY: &'static str = "JTIDY";
    pub const NONE: &'static str = "NONE";
    pub const TAGSOUP: &'static str = "TAGSOUP";
}

pub struct ColorSpace;
impl ColorSpace {
    pub const CMYK: &'static str = "CMYK";
    pub const RGB: &'static str = "RGB";
}

pub struct Conformance;
impl Conformance {
    pub const PDF: &'static str = "PDF";
    pub const PDFA1A: &'static str = "PDFA1A";
    pub const PDFA1A_PDFUA1: &'static str = "PDFA1A_PDFUA1";
    pub const PDFA1B: &'static str = "PDFA1B";
    pub const PDFA2A: &'static str = "PDFA2A";
    pub const PDFA2A_PDFUA1: &'static str = "PDFA2A_PDFUA1";
    pub const PDFA2B: &'static str = "PDFA2B";
    pub const PDFA2U: &'static str = "PDFA2U";
    pub const PDFA3A: &'static str = "PDFA3A";
    pub const PDFA3A_PDFUA1: &'static str = "PDFA3A_PDFUA1";
    pub const PDFA3B: &'static str = "PDFA3B";
    pub const PDFA3U: &'static str = "PDFA3U";
    pub const PDFUA1: &'static str = "PDFUA1";
    pub const PDFX1A_2001: &'static str = "PDFX1A_2001";
    pub const PDFX1A_2003: &'static str = "PDFX1A_2003";
    pub const PDFX3_2002: &'static str = "PDFX3_2002";
    pub const PDFX3_2003: &'static str = "PDFX3_2003";
    pub const PDFX4: &'static str = "PDFX4";
    pub const PDFX4P: &'static str = "PDFX4P";
}

pub struct ContentType;
impl ContentType {
    pub const BINARY: &'static str = "BINARY";
    pub const BMP: &'static str = "BMP";
    pub const GIF: &'static str = "GIF";
    pub const HTML: &'static str = "HTML";
    pub const JPEG: &'static str = "JPEG";
    pub const JSON: &'static str = "JSON";
    pub const NONE: &'static str = "NONE";
    pub const PDF: &'static str = "PDF";
    pub const PNG: &'static str = "PNG";
    pub const TEXT: &'static str = "TEXT";
    pub const TIFF: &'static str = "TIFF";
    pub const XML: &'static str = "XML";
}

pub struct CssPropertySupport;
impl CssPropertySupport {
    pub const ALL: &'static str = "ALL";
    pub const HTML: &'static str = "HTML";
    pub const HTML_THIRD_PARTY: &'static str = "HTML_THIRD_PARTY";
    pub const HTML_THIRD_PARTY_LENIENT: &'static str = "HTML_THIRD_PARTY_LENIENT";
}

pub struct Doctype;
impl Doctype {
    pub const AUTODETECT: &'static str = "AUTODETECT";
    pub const HTML5: &'static str = "HTML5";
    pub const XHTML: &'static str = "XHTML";
    pub const XML: &'static str = "XML";
}

pub struct Encryption;
impl Encryption {
    pub const NONE: &'static str = "NONE";
    pub const TYPE_128: &'static str = "TYPE_128";
    pub const TYPE_40: &'static str = "TYPE_40";
}

pub struct ErrorPolicy;
impl ErrorPolicy {
    pub const CONFORMANCE_VALIDATION_UNAVAILABLE: &'static str =
        "CONFORMANCE_VALIDATION_UNAVAILABLE";
    pub const LICENSE: &'static str = "LICENSE";
    pub const MISSING_RESOURCE: &'static str = "MISSING_RESOURCE";
    pub const UNCAUGHT_JAVASCRIPT_EXCEPTION: &'static str = "UNCAUGHT_JAVASCRIPT_EXCEPTION";
}

pub struct ExceedingContentAgainst;
impl ExceedingContentAgainst {
    pub const NONE: &'static str = "NONE";
    pub const PAGE_BORDERS: &'static str = "PAGE_BORDERS";
    pub const PAGE_CONTENT: &'static str = "PAGE_CONTENT";
    pub const PARENT: &'static str = "PARENT";
}

pub struct ExceedingContentAnalyze;
impl ExceedingContentAnalyze {
    pub const CONTENT: &'static str = "CONTENT";
    pub const CONTENT_AND_BOXES: &'static str = "CONTENT_AND_BOXES";
    pub const CONTENT_AND_STATIC_BOXES: &'static str = "CONTENT_AND_STATIC_BOXES";
    pub const NONE: &'static str = "NONE";
}

pub struct HttpsMode;
impl HttpsMode {
    pub const LENIENT: &'static str = "LENIENT";
    pub const STRICT: &'static str = "STRICT";
}

pub struct JavaScriptDebugMode;
impl JavaScriptDebugMode {
    pub const EXCEPTIONS: &'static str = "EXCEPTIONS";
    pub const FUNCTIONS: &'static str = "FUNCTIONS";
    pub const LINES: &'static str = "LINES";
    pub const NONE: &'static str = "NONE";
    pub const POSITIONS: &'static str = "POSITIONS";
}

pub struct JavaScriptMode;
impl JavaScriptMode {
    pub const DISABLED: &'static str = "DISABLED";
    pub const ENABLED: &'static str = "ENABLED";
    pub const ENABLED_NO_LAYOUT: &'static str = "ENABLED_NO_LAYOUT";
    pub const ENABLED_REAL_TIME: &'static str = "ENABLED_REAL_TIME";
    pub const ENABLED_TIME_LAPSE: &'static str = "ENABLED_TIME_LAPSE";
}

pub struct KeystoreType;
impl KeystoreType {
    pub const JKS: &'static str = "JKS";
    pub const PKCS12: &'static str = "PKCS12";
}

pub struct LogLevel;
impl LogLevel {
    pub const DEBUG: &'static str = "DEBUG";
    pub const FATAL: &'static str = "FATAL";
    pub const INFO: &'static str = "INFO";
    pub const NONE: &'static str = "NONE";
    pub const PERFORMANCE: &'static str = "PERFORMANCE";
    pub const WARN: &'static str = "WARN";
}

pub struct MediaFeature;
impl MediaFeature {
    pub const ASPECT_RATIO: &'static str = "ASPECT_RATIO";
    pub const COLOR: &'static str = "COLOR";
    pub const COLOR_INDEX: &'static str = "COLOR_INDEX";
    pub const DEVICE_ASPECT_RATIO: &'static str = "DEVICE_ASPECT_RATIO";
    pub const DEVICE_HEIGHT: &'static str = "DEVICE_HEIGHT";
    pub const DEVICE_WIDTH: &'static str = "DEVICE_WIDTH";
    pub const GRID: &'static str = "GRID";
    pub const HEIGHT: &'static str = "HEIGHT";
    pub const MONOCHROME: &'static str = "MONOCHROME";
    pub const ORIENTATION: &'static str = "ORIENTATION";
    pub const RESOLUTION: &'static str = "RESOLUTION";
    pub const WIDTH: &'static str = "WIDTH";
}

pub struct MergeMode;
impl MergeMode {
    pub const APPEND: &'static str = "APPEND";
    pub const ARRANGE: &'static str = "ARRANGE";
    pub const OVERLAY: &'static str = "OVERLAY";
    pub const OVERLAY_BELOW: &'static str = "OVERLAY_BELOW";
    pub const PREPEND: &'static str = "PREPEND";
}

pub struct OutputIntentDefaultProfile;
impl OutputIntentDefaultProfile {
    pub const FOGRA39: &'static str = "Coated FOGRA39";
    pub const GRACOL: &'static str = "Coated GRACoL 2006";
    pub const IFRA: &'static str = "ISO News print 26% (IFRA)";
    pub const JAPAN: &'static str = "Japan Color 2001 Coated";
    pub const JAPAN_NEWSPAPER: &'static str = "Japan Color 2001 Newspaper";
    pub const JAPAN_UNCOATED: &'static str = "Japan Color 2001 Uncoated";
    pub const JAPAN_WEB: &'static str = "Japan Web Coated (Ad)";
    pub const SWOP: &'static str = "US Web Coated (SWOP) v2";
    pub const SWOP_3: &'static str = "Web Coated SWOP 2006 Grade 3 Paper";
}

pub struct OutputType;
impl OutputType {
    pub const BMP: &'static str = "BMP";
    pub const GIF: &'static str = "GIF";
    pub const GIF_DITHERED: &'static str = "GIF_DITHERED";
    pub const JPEG: &'static str = "JPEG";
    pub const PDF: &'static str = "PDF";
    pub const PNG: &'static str = "PNG";
    pub const PNG_AI: &'static str = "PNG_AI";
    pub const PNG_TRANSPARENT: &'static str = "PNG_TRANSPARENT";
    pub const PNG_TRANSPARENT_AI: &'static str = "PNG_TRANSPARENT_AI";
    pub const TIFF_CCITT_1D: &'static str = "TIFF_CCITT_1D";
    pub const TIFF_CCITT_1D_DITHERED: &'static str = "TIFF_CCITT_1D_DITHERED";
    pub const TIFF_CCITT_GROUP_3: &'static str = "TIFF_CCITT_GROUP_3";
    pub const TIFF_CCITT_GROUP_3_DITHERED: &'static str = "TIFF_CCITT_GROUP_3_DITHERED";
    pub const TIFF_CCITT_GROUP_4: &'static str = "TIFF_CCITT_GROUP_4";
    pub const TIFF_CCITT_GROUP_4_DITHERED: &'static str = "TIFF_CCITT_GROUP_4_DITHERED";
    pub const TIFF_LZW: &'static str = "TIFF_LZW";
    pub const TIFF_PACKBITS: &'static str = "TIFF_PACKBITS";
    pub const TIFF_UNCOMPRESSED: &'static str = "TIFF_UNCOMPRESSED";
}

pub struct OverlayRepeat;
impl OverlayRepeat {
    pub const ALL_PAGES: &'static str = "ALL_PAGES";
    pub const LAST_PAGE: &'static str = "LAST_PAGE";
    pub const NONE: &'static str = "NONE";
    pub const TRIM: &'static str = "TRIM";
}

pub struct PageOrder;
impl PageOrder {
    pub const BOOKLET: &'static str = "BOOKLET";
    pub const BOOKLET_RTL: &'static str = "BOOKLET_RTL";
    pub const EVEN: &'static str = "EVEN";
    pub const ODD: &'static str = "ODD";
    pub const REVERSE: &'static str = "REVERSE";
}

pub struct PagesPerSheetDirection;
impl PagesPerSheetDirection {
    pub const DOWN_LEFT: &'static str = "DOWN_LEFT";
    pub const DOWN_RIGHT: &'static str = "DOWN_RIGHT";
    pub const LEFT_DOWN: &'static str = "LEFT_DOWN";
    pub const LEFT_UP: &'static str = "LEFT_UP";
    pub const RIGHT_DOWN: &'static str = "RIGHT_DOWN";
    pub const RIGHT_UP: &'static str = "RIGHT_UP";
    pub const UP_LEFT: &'static str = "UP_LEFT";
    pub const UP_RIGHT: &'static str = "UP_RIGHT";
}

pub struct PdfScriptTriggerEvent;
impl PdfScriptTriggerEvent {
    pub const AFTER_PRINT: &'static str = "AFTER_PRINT";
    pub const AFTER_SAVE: &'static str = "AFTER_SAVE";
    pub const BEFORE_PRINT: &'static str = "BEFORE_PRINT";
    pub const BEFORE_SAVE: &'static str = "BEFORE_SAVE";
    pub const CLOSE: &'static str = "CLOSE";
    pub const OPEN: &'static str = "OPEN";
}

pub struct ProcessingPreferences;
impl ProcessingPreferences {
    pub const SAVE_MEMORY_IMAGES: &'static str = "SAVE_MEMORY_IMAGES";
}

pub struct QuirksMode;
impl QuirksMode {
    pub const DETECT: &'static str = "DETECT";
    pub const QUIRKS: &'static str = "QUIRKS";
    pub const STANDARDS: &'static str = "STANDARDS";
}

pub struct ResolutionUnit;
impl ResolutionUnit {
    pub const DPCM: &'static str = "DPCM";
    pub const DPI: &'static str = "DPI";
    pub const DPPX: &'static str = "DPPX";
    pub const TDPCM: &'static str = "TDPCM";
    pub const TDPI: &'static str = "TDPI";
    pub const TDPPX: &'static str = "TDPPX";
}

pub struct ResourceType;
impl ResourceType {
    pub const ATTACHMENT: &'static str = "ATTACHMENT";
    pub const DOCUMENT: &'static str = "DOCUMENT";
    pub const FONT: &'static str = "FONT";
    pub const ICC_PROFILE: &'static str = "ICC_PROFILE";
    pub const IFRAME: &'static str = "IFRAME";
    pub const IMAGE: &'static str = "IMAGE";
    pub const LICENSEKEY: &'static str = "LICENSEKEY";
    pub const MERGE_DOCUMENT: &'static str = "MERGE_DOCUMENT";
    pub const OBJECT: &'static str = "OBJECT";
    pub const RUNNING_DOCUMENT: &'static str = "RUNNING_DOCUMENT";
    pub const SCRIPT: &'static str = "SCRIPT";
    pub const STYLESHEET: &'static str = "STYLESHEET";
    pub const UNKNOWN: &'static str = "UNKNOWN";
    pub const XHR: &'static str = "XHR";
}

pub struct SigningMode;
impl SigningMode {
    pub const SELF_SIGNED: &'static str = "SELF_SIGNED";
    pub const VERISIGN_SIGNED: &'static str = "VERISIGN_SIGNED";
    pub const WINCER_SIGNED: &'static str = "WINCER_SIGNED";
}

pub struct ViewerPreferences;
impl ViewerPreferences {
    pub const CENTER_WINDOW: &'static str = "CENTER_WINDOW";
    pub const DIRECTION_L2R: &'static str = "DIRECTION_L2R";
    pub const DIRECTION_R2L: &'static str = "DIRECTION_R2L";
    pub const DISPLAY_DOC_TITLE: &'static str = "DISPLAY_DOC_TITLE";
    pub const DUPLEX_FLIP_LONG_EDGE: &'static str = "DUPLEX_FLIP_LONG_EDGE";
    pub const DUPLEX_FLIP_SHORT_EDGE: &'static str = "DUPLEX_FLIP_SHORT_EDGE";
    pub const DUPLEX_SIMPLEX: &'static str = "DUPLEX_SIMPLEX";
    pub const FIT_WINDOW: &'static str = "FIT_WINDOW";
    pub const HIDE_MENUBAR: &'static str = "HIDE_MENUBAR";
    pub const HIDE_TOOLBAR: &'static str = "HIDE_TOOLBAR";
    pub const HIDE_WINDOW_UI: &'static str = "HIDE_WINDOW_UI";
    pub const NON_FULLSCREEN_PAGE_MODE_USE_NONE: &'static str =
        "NON_FULLSCREEN_PAGE_MODE_USE_NONE";
    pub const NON_FULLSCREEN_PAGE_MODE_USE_OC: &'static str = "NON_FULLSCREEN_PAGE_MODE_USE_OC";
    pub const NON_FULLSCREEN_PAGE_MODE_USE_OUTLINES: &'static str =
        "NON_FULLSCREEN_PAGE_MODE_USE_OUTLINES";
    pub const NON_FULLSCREEN_PAGE_MODE_USE_THUMBS: &'static str =
        "NON_FULLSCREEN_PAGE_MODE_USE_THUMBS";
    pub const PAGE_LAYOUT_ONE_COLUMN: &'static str = "PAGE_LAYOUT_ONE_COLUMN";
    pub const PAGE_LAYOUT_SINGLE_PAGE: &'static str = "PAGE_LAYOUT_SINGLE_PAGE";
    pub const PAGE_LAYOUT_TWO_COLUMN_LEFT: &'static str = "PAGE_LAYOUT_TWO_COLUMN_LEFT";
    pub const PAGE_LAYOUT_TWO_COLUMN_RIGHT: &'static str = "PAGE_LAYOUT_TWO_COLUMN_RIGHT";
    pub const PAGE_LAYOUT_TWO_PAGE_LEFT: &'static str = "PAGE_LAYOUT_TWO_PAGE_LEFT";
    pub const PAGE_LAYOUT_TWO_PAGE_RIGHT: &'static str = "PAGE_LAYOUT_TWO_PAGE_RIGHT";
    pub const PAGE_MODE_FULLSCREEN: &'static str = "PAGE_MODE_FULLSCREEN";
    pub const PAGE_MODE_USE_ATTACHMENTS: &'static str = "PAGE_MODE_USE_ATTACHMENTS";
    pub const PAGE_MODE_USE_NONE: &'static str = "PAGE_MODE_USE_NONE";
    pub const PAGE_MODE_USE_OC: &'static str = "PAGE_MODE_USE_OC";
    pub const PAGE_MODE_USE_OUTLINES: &'static str = "PAGE_MODE_USE_OUTLINES";
    pub const PAGE_MODE_USE_THUMBS: &'static str = "PAGE_MODE_USE_THUMBS";
    pub const PICKTRAYBYPDFSIZE_FALSE: &'static str = "PICKTRAYBYPDFSIZE_FALSE";
    pub const PICKTRAYBYPDFSIZE_TRUE: &'static str = "PICKTRAYBYPDFSIZE_TRUE";
    pub const PRINTSCALING_APPDEFAULT: &'static str = "PRINTSCALING_APPDEFAULT";
    pub const PRINTSCALING_NONE: &'static str = "PRINTSCALING_NONE";
}

pub struct XmpPriority;
impl XmpPriority {
    pub const HIGH: &'static str = "HIGH";
    pub const LOW: &'static str = "LOW";
    pub const NONE: &'static str = "NONE";
}
