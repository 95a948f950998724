use super::StringTable;

const ENGLISH: &[(&str, &str)] = &[
    ("ui.title", "Global Exhibition Center"),
    ("ui.subtitle", "Cross-border E-commerce Hub"),
    ("ui.language", "Language"),
    ("header.help", "Help"),
    ("header.panel", "Panel"),
    ("panel.subtitle", "Interactive 3D Space Booking"),
    ("panel.select_floor", "Select Floor"),
    ("panel.zones", "Zones"),
    ("overview.title", "6-Story Exhibition Complex"),
    ("overview.hint", "Click a floor to explore zones"),
    ("zone.details", "Zone Details"),
    ("zone.area", "Area"),
    ("zone.type", "Type"),
    ("zone.status", "Status"),
    ("zone.daily_rate", "Daily Rate"),
    ("zone.preview", "Preview"),
    ("zone.no_preview", "Preview not available"),
    ("floor.plan", "Floor plan"),
    ("dates.title", "Select Dates"),
    ("dates.from", "From"),
    ("dates.to", "To"),
    ("dates.duration", "Duration"),
    ("dates.days", "days"),
    ("dates.total", "Total"),
    ("booking.reserve", "Reserve Zone"),
    ("booking.processing", "Processing..."),
    ("booking.success", "Booking Submitted Successfully!"),
    ("notice.booked", "This zone is currently booked"),
    ("notice.pending", "This zone has a pending reservation"),
    ("notice.unavailable", "This zone is not available for booking"),
    ("help.title", "How to Use"),
    ("help.step1", "Click on a floor to isolate and view its zones"),
    ("help.step2", "Click on a zone to see details and availability"),
    ("help.step3", "Select dates and reserve your exhibition space"),
    ("help.step4", "Drag to rotate, scroll to zoom the 3D view"),
    ("help.close", "Close"),
    ("footer.floors", "Floors"),
    ("footer.zones", "Exhibition Zones"),
    ("footer.available", "Available"),
    ("filter.all", "All"),
    ("filter.retail", "Retail"),
    ("filter.livestream", "Livestream"),
    ("filter.office", "Office"),
    ("filter.showroom", "Showroom"),
    ("rail.up", "Go up"),
    ("rail.down", "Go down"),
    ("rail.overview", "View all floors"),
    ("unit.sqm", "sqm"),
];

const CHINESE: &[(&str, &str)] = &[
    ("ui.title", "全球展览中心"),
    ("ui.subtitle", "跨境电商枢纽"),
    ("ui.language", "语言"),
    ("header.help", "帮助"),
    ("header.panel", "面板"),
    ("panel.subtitle", "交互式3D空间预订"),
    ("panel.select_floor", "选择楼层"),
    ("panel.zones", "展区"),
    ("overview.title", "六层展览综合体"),
    ("overview.hint", "点击楼层查看展区"),
    ("zone.details", "展区详情"),
    ("zone.area", "面积"),
    ("zone.type", "类型"),
    ("zone.status", "状态"),
    ("zone.daily_rate", "日租金"),
    ("zone.preview", "预览"),
    ("zone.no_preview", "暂无预览"),
    ("floor.plan", "平面图"),
    ("dates.title", "选择日期"),
    ("dates.from", "开始"),
    ("dates.to", "结束"),
    ("dates.duration", "时长"),
    ("dates.days", "天"),
    ("dates.total", "总计"),
    ("booking.reserve", "预订展区"),
    ("booking.processing", "处理中..."),
    ("booking.success", "预订申请已提交！"),
    ("notice.booked", "该展区已被预订"),
    ("notice.pending", "该展区有待审核的预订"),
    ("notice.unavailable", "该展区暂不开放预订"),
    ("help.title", "使用说明"),
    ("help.step1", "点击楼层以单独查看其展区"),
    ("help.step2", "点击展区查看详情与可用状态"),
    ("help.step3", "选择日期并预订展位"),
    ("help.step4", "拖动旋转，滚轮缩放3D视图"),
    ("help.close", "关闭"),
    ("footer.floors", "层楼"),
    ("footer.zones", "个展区"),
    ("footer.available", "可预订"),
    ("filter.all", "全部"),
    ("filter.retail", "零售"),
    ("filter.livestream", "直播"),
    ("filter.office", "办公"),
    ("filter.showroom", "展厅"),
    ("rail.up", "上一层"),
    ("rail.down", "下一层"),
    ("rail.overview", "查看全部楼层"),
    ("unit.sqm", "平方米"),
];

pub(crate) fn build_english_table() -> StringTable {
    ENGLISH.iter().copied().collect()
}

pub(crate) fn build_chinese_table() -> StringTable {
    CHINESE.iter().copied().collect()
}

#[cfg(test)]
pub(crate) const ENGLISH_KEYS: usize = ENGLISH.len();
#[cfg(test)]
pub(crate) const CHINESE_KEYS: usize = CHINESE.len();
