/// Font files shipped by common Linux distributions, checked in priority order.
pub const CANDIDATE_FONTS: &[&str] = &[
    "wqy-microhei.ttc",
    "SourceHanSansCN-Regular.otf",
    "NotoSerifCJK-Regular.ttc",
    "NotoSansCJK-Regular.ttc",
];

/// Western families that receive the CJK font as a system-link fallback.
pub const LINK_FAMILIES: &[&str] = &[
    "Arial",
    "Courier New",
    "Lucida Sans Unicode",
    "MS Sans Serif",
    "Microsoft Sans Serif",
    "NSimSun",
    "SimSun",
    "Tahoma",
    "Times New Roman",
];
