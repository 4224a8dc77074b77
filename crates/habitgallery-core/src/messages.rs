//! User-facing strings (zh-TW, the page's working language).

// Gallery
pub const GALLERY_LOADING: &str = "正在載入作品...";
pub const GALLERY_EMPTY: &str = "目前還沒有人上傳作品喔！快來成為第一位吧！";
pub const GALLERY_ERROR_PREFIX: &str = "載入作品時發生錯誤：";
pub const MALFORMED_WORKS: &str = "從伺服器收到的資料格式不正確。";

// Upload
pub const SUBMIT_LABEL: &str = "確認上傳";
pub const SUBMITTING_LABEL: &str = "上傳中...";
pub const UPLOAD_IN_PROGRESS: &str = "正在上傳作品...";
pub const UPLOAD_SUCCESS: &str = "作品上傳成功！畫廊正在更新...";
pub const UPLOAD_FAILED_PREFIX: &str = "上傳失敗: ";
pub const UPLOAD_UNKNOWN_ERROR: &str = "發生未知錯誤";
pub const UPLOAD_CONNECTIVITY: &str = "上傳過程中發生網路或伺服器連線錯誤。";

// Detail modal
pub const ANONYMOUS_AUTHOR: &str = "匿名";
pub const NOT_PROVIDED: &str = "(未提供)";
pub const WORK_NOT_FOUND_ALERT: &str = "找不到這個作品的資料，請重新整理頁面後再試一次。";

// Slideshow
pub const SLIDESHOW_EMPTY: &str = "目前還沒有分享的圖片";

// Image fallback captions
pub const IMAGE_LOAD_FAILED: &str = "圖片載入失敗";
pub const WORK_IMAGE_LOAD_FAILED: &str = "作品圖片載入失敗";
pub const SCORECARD_LOAD_FAILED: &str = "計分卡圖片載入失敗";
pub const COMIC_LOAD_FAILED: &str = "漫畫圖片載入失敗";
pub const CAT_LOAD_FAILED: &str = "Cat Error";

// Bootstrap
pub const INIT_ERROR_BANNER: &str =
    "頁面部分元件載入失敗，部分功能可能無法使用。請嘗試重新整理頁面。";
