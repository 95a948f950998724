//! The six floors of the Global Exhibition Center as shipped with the app.

use super::types::{Floor, Zone, ZoneStatus};

use ZoneStatus::{Available, Booked, Pending};

struct ZoneRow {
    id: &'static str,
    name: &'static str,
    name_en: &'static str,
    category: &'static str,
    area: f32,
    status: ZoneStatus,
    price: u32,
    position: [f32; 3],
    size: [f32; 3],
    color: &'static str,
    description: &'static str,
    image: Option<&'static str>,
}

struct FloorRow {
    id: u32,
    name: &'static str,
    name_en: &'static str,
    core_function: &'static str,
    color: &'static str,
    floor_plan_image: &'static str,
    zones: &'static [ZoneRow],
}

impl ZoneRow {
    fn to_zone(&self) -> Zone {
        Zone {
            id: self.id.to_string(),
            name: self.name.to_string(),
            name_en: self.name_en.to_string(),
            category: self.category.to_string(),
            area: self.area,
            status: self.status,
            price: self.price,
            position: self.position,
            size: self.size,
            color: self.color.to_string(),
            description: self.description.to_string(),
            image: self.image.map(str::to_string),
        }
    }
}

impl FloorRow {
    fn to_floor(&self) -> Floor {
        Floor {
            id: self.id,
            name: self.name.to_string(),
            name_en: self.name_en.to_string(),
            core_function: self.core_function.to_string(),
            zones: self.zones.iter().map(ZoneRow::to_zone).collect(),
            color: self.color.to_string(),
            floor_plan_image: self.floor_plan_image.to_string(),
        }
    }
}

/// Build the owned floor list in ascending id order.
pub fn builtin_floors() -> Vec<Floor> {
    FLOORS.iter().map(FloorRow::to_floor).collect()
}

const FLOORS: &[FloorRow] = &[
    FloorRow {
        id: 1,
        name: "1F: 全球选品与特色产业带展厅",
        name_en: "1F: Global Selection & Industry Belt Exhibition",
        core_function: "沉浸式展示、零售体验、产业带推介",
        color: "#F5E6A3",
        floor_plan_image: "/images/1f.png",
        zones: &[
            ZoneRow {
                id: "1f-retail",
                name: "零售产品区与销售柜台",
                name_en: "Retail Product Area",
                category: "Retail",
                area: 280.0,
                status: Available,
                price: 2500,
                position: [-1.2, 0.0, -0.5],
                size: [1.8, 0.15, 1.6],
                color: "#F5E6A3",
                description: "沉浸式零售体验区，适合产品展示与现场销售",
                image: Some("/images/1-e6-a5-bc-e7-bb-bc-e5-90-88-e8-b4-a7-e6-9e-b6.jpg"),
            },
            ZoneRow {
                id: "1f-industry",
                name: "固定展架与橱窗展台",
                name_en: "Fixed Display & Window Showcase",
                category: "Display",
                area: 180.0,
                status: Booked,
                price: 1800,
                position: [-1.2, 0.0, 0.8],
                size: [1.5, 0.15, 1.0],
                color: "#F5E6A3",
                description: "中国特色产业海外展厅，展示各地优势出海产品",
                image: Some("/images/1-e6-a5-bc-e4-b8-ad-e5-9e-8b-e5-b1-95-e5-8f-b0.jpg"),
            },
            ZoneRow {
                id: "1f-multifunction",
                name: "多功能空间",
                name_en: "Multi-function Space",
                category: "Event",
                area: 320.0,
                status: Available,
                price: 3500,
                position: [1.0, 0.0, 0.0],
                size: [1.6, 0.15, 2.0],
                color: "#E8D4F0",
                description: "灵活开放空间，适合活动、发布会及大型展示",
                image: Some(
                    "/images/1-e6-a5-bc-e5-b1-95-e5-8f-b0-e5-b8-a6-e6-b4-bd-e8-b0-88-e5-8c-ba.jpg",
                ),
            },
            ZoneRow {
                id: "1f-digital",
                name: "互动数字屏墙与观看区",
                name_en: "Interactive Digital Wall",
                category: "Digital",
                area: 120.0,
                status: Pending,
                price: 2000,
                position: [1.0, 0.0, 1.2],
                size: [1.2, 0.15, 0.8],
                color: "#E8D4F0",
                description: "融合线下体验与数字化选品功能",
                image: Some("/images/1-e6-a5-bc-e4-ba-92-e5-8a-a8-e5-8c-ba-e5-b1-95-e5-8f-b0.jpg"),
            },
        ],
    },
    FloorRow {
        id: 2,
        name: "2F: 品牌生态与独立展区",
        name_en: "2F: Brand Ecosystem & Independent Exhibition",
        core_function: "品牌孵化、独立形象展示",
        color: "#C4D4C0",
        floor_plan_image: "/images/2f.png",
        zones: &[
            ZoneRow {
                id: "2f-independent-1",
                name: "品牌独立展厅 A",
                name_en: "Brand Independent Showroom A",
                category: "Showroom",
                area: 150.0,
                status: Booked,
                price: 3200,
                position: [-1.5, 0.0, -0.8],
                size: [1.2, 0.15, 1.4],
                color: "#C4D4C0",
                description: "为成熟的出海品牌提供独立的展示空间",
                image: None,
            },
            ZoneRow {
                id: "2f-independent-2",
                name: "品牌独立展厅 B",
                name_en: "Brand Independent Showroom B",
                category: "Showroom",
                area: 120.0,
                status: Available,
                price: 2800,
                position: [-1.5, 0.0, 0.6],
                size: [1.0, 0.15, 1.2],
                color: "#C4D4C0",
                description: "强化品牌调性与故事感的专属空间",
                image: None,
            },
            ZoneRow {
                id: "2f-joint",
                name: "联合品牌展区",
                name_en: "Joint Brand Exhibition Area",
                category: "Joint Exhibition",
                area: 400.0,
                status: Available,
                price: 2200,
                position: [0.8, 0.0, 0.0],
                size: [2.0, 0.15, 2.2],
                color: "#E8C4C4",
                description: "灵活的开放式布局，适合新兴品牌或同类目品牌进行联合策展",
                image: Some("/images/2-e6-a5-bc-e8-81-94-e5-90-88-e5-93-81-e7-89-8c-e5-b1-95-e5-8c-ba.jpg"),
            },
        ],
    },
    FloorRow {
        id: 3,
        name: "3F: 生活方式与垂直类目选品",
        name_en: "3F: Lifestyle & Vertical Category Selection",
        core_function: "精细化选品、垂直品类展示",
        color: "#D4C4B0",
        floor_plan_image: "/images/3f.png",
        zones: &[
            ZoneRow {
                id: "3f-pet",
                name: "宠物展区",
                name_en: "Pet Zone",
                category: "Category",
                area: 100.0,
                status: Available,
                price: 1600,
                position: [-1.6, 0.0, -1.0],
                size: [0.9, 0.15, 0.9],
                color: "#C4D4C0",
                description: "针对高增长的出海宠物经济，专门设立的场景化展示区",
                image: Some("/images/3-e6-a5-bc-e7-89-b9-e8-89-b2-e4-ba-a7-e4-b8-9a-e5-b1-95-e5-8c-baa.jpg"),
            },
            ZoneRow {
                id: "3f-department",
                name: "百货展区",
                name_en: "Department Store Zone",
                category: "Category",
                area: 120.0,
                status: Booked,
                price: 1400,
                position: [-1.6, 0.0, 0.2],
                size: [0.9, 0.15, 1.0],
                color: "#C4D4C0",
                description: "涵盖家居、日用等全品类百货，提供一站式选品体验",
                image: Some("/images/3-e6-a5-bc-e7-89-b9-e8-89-b2-e4-ba-a7-e4-b8-9a-e5-8c-bac.jpg"),
            },
            ZoneRow {
                id: "3f-textile",
                name: "家纺展区",
                name_en: "Home Textile Zone",
                category: "Category",
                area: 90.0,
                status: Available,
                price: 1500,
                position: [0.5, 0.0, -1.0],
                size: [0.8, 0.15, 0.8],
                color: "#E8C4C4",
                description: "家纺产品专区",
                image: None,
            },
            ZoneRow {
                id: "3f-stationery",
                name: "文具展区",
                name_en: "Stationery Zone",
                category: "Category",
                area: 80.0,
                status: Available,
                price: 1200,
                position: [1.4, 0.0, -1.0],
                size: [0.7, 0.15, 0.8],
                color: "#E8C4C4",
                description: "文具创意产品展区",
                image: None,
            },
            ZoneRow {
                id: "3f-appliance",
                name: "家电展区",
                name_en: "Home Appliance Zone",
                category: "Category",
                area: 130.0,
                status: Pending,
                price: 1800,
                position: [0.5, 0.0, 0.0],
                size: [1.0, 0.15, 1.0],
                color: "#E8C4C4",
                description: "智能家电与小家电展示区",
                image: Some("/images/3-e6-a5-bc-e7-89-b9-e8-89-b2-e4-ba-a7-e4-b8-9a-e5-8c-bab.jpg"),
            },
            ZoneRow {
                id: "3f-jewelry",
                name: "珠宝展区",
                name_en: "Jewelry Zone",
                category: "Category",
                area: 70.0,
                status: Available,
                price: 2000,
                position: [-0.5, 0.0, 1.0],
                size: [0.7, 0.15, 0.7],
                color: "#E8C4C4",
                description: "珠宝首饰精品展区",
                image: None,
            },
            ZoneRow {
                id: "3f-socks",
                name: "袜子展区",
                name_en: "Socks Zone",
                category: "Category",
                area: 60.0,
                status: Available,
                price: 1000,
                position: [0.4, 0.0, 1.0],
                size: [0.6, 0.15, 0.7],
                color: "#E8C4C4",
                description: "袜类产品专区",
                image: None,
            },
            ZoneRow {
                id: "3f-clothing",
                name: "服装展区",
                name_en: "Clothing Zone",
                category: "Category",
                area: 110.0,
                status: Booked,
                price: 1700,
                position: [1.3, 0.0, 1.0],
                size: [0.9, 0.15, 0.8],
                color: "#E8C4C4",
                description: "服装服饰展示区",
                image: None,
            },
        ],
    },
    FloorRow {
        id: 4,
        name: "4F: 数字媒体与全球直播中心",
        name_en: "4F: Digital Media & Global Livestreaming Center",
        core_function: "跨境直播、内容生产、TikTok运营",
        color: "#B0C4D4",
        floor_plan_image: "/images/4f.png",
        zones: &[
            ZoneRow {
                id: "4f-livestream-large",
                name: "大型直播区域",
                name_en: "Large Livestreaming Area",
                category: "Livestream",
                area: 200.0,
                status: Available,
                price: 3500,
                position: [-1.5, 0.0, -0.5],
                size: [1.2, 0.15, 1.5],
                color: "#A0A0A0",
                description: "配置专业的大型直播区域，配备专业绿幕背景",
                image: None,
            },
            ZoneRow {
                id: "4f-tiktok",
                name: "TikTok专属直播间",
                name_en: "TikTok Dedicated Studio",
                category: "Livestream",
                area: 80.0,
                status: Booked,
                price: 2800,
                position: [-1.5, 0.0, 0.8],
                size: [0.8, 0.15, 0.8],
                color: "#A0A0A0",
                description: "专为TikTok等海外社交媒体平台设计，模拟真实海外居家或消费场景",
                image: None,
            },
            ZoneRow {
                id: "4f-studio-1",
                name: "直播间 A",
                name_en: "Studio A",
                category: "Studio",
                area: 50.0,
                status: Available,
                price: 1500,
                position: [0.8, 0.0, -0.8],
                size: [0.6, 0.15, 0.6],
                color: "#E8C4C4",
                description: "小型直播间，适合单人或双人直播",
                image: None,
            },
            ZoneRow {
                id: "4f-studio-2",
                name: "直播间 B",
                name_en: "Studio B",
                category: "Studio",
                area: 50.0,
                status: Available,
                price: 1500,
                position: [1.4, 0.0, -0.8],
                size: [0.6, 0.15, 0.6],
                color: "#C4D4E8",
                description: "小型直播间，适合单人或双人直播",
                image: None,
            },
            ZoneRow {
                id: "4f-studio-3",
                name: "直播间 C",
                name_en: "Studio C",
                category: "Studio",
                area: 50.0,
                status: Pending,
                price: 1500,
                position: [0.8, 0.0, 0.0],
                size: [0.6, 0.15, 0.6],
                color: "#C4E8C4",
                description: "小型直播间，适合单人或双人直播",
                image: None,
            },
            ZoneRow {
                id: "4f-studio-4",
                name: "直播间 D",
                name_en: "Studio D",
                category: "Studio",
                area: 50.0,
                status: Available,
                price: 1500,
                position: [1.4, 0.0, 0.0],
                size: [0.6, 0.15, 0.6],
                color: "#E8D4C4",
                description: "小型直播间，适合单人或双人直播",
                image: None,
            },
        ],
    },
    FloorRow {
        id: 5,
        name: "5F: 全球运营与行政中心",
        name_en: "5F: Global Operations & Administrative Center",
        core_function: "办公运营、团队协作",
        color: "#C4C4D4",
        floor_plan_image: "/images/5f.png",
        zones: &[
            ZoneRow {
                id: "5f-open-office",
                name: "现代化办公区",
                name_en: "Modern Office Area",
                category: "Office",
                area: 450.0,
                status: Booked,
                price: 0,
                position: [-1.0, 0.0, 0.0],
                size: [1.8, 0.15, 2.0],
                color: "#C4C4D4",
                description: "开放式办公环境，服务于跨境电商运营团队",
                image: None,
            },
            ZoneRow {
                id: "5f-conference",
                name: "会议室区域",
                name_en: "Conference Room",
                category: "Meeting",
                area: 80.0,
                status: Booked,
                price: 0,
                position: [1.2, 0.0, -0.5],
                size: [0.8, 0.15, 1.0],
                color: "#4A5568",
                description: "大型会议室，适合团队会议与培训",
                image: None,
            },
        ],
    },
    FloorRow {
        id: 6,
        name: "6F: 总裁行政与高端接待",
        name_en: "6F: Executive & Premium Reception",
        core_function: "高层会晤、商务宴请、私密社交",
        color: "#D4B896",
        floor_plan_image: "/images/6f.png",
        zones: &[
            ZoneRow {
                id: "6f-vip-lounge",
                name: "专属VIP休息室",
                name_en: "Exclusive VIP Lounge",
                category: "VIP",
                area: 120.0,
                status: Available,
                price: 5000,
                position: [-1.5, 0.0, -0.5],
                size: [1.0, 0.15, 1.2],
                color: "#D4B896",
                description: "提供静谧的商务洽谈环境",
                image: None,
            },
            ZoneRow {
                id: "6f-meeting",
                name: "总裁会议套间",
                name_en: "Executive Meeting Suite",
                category: "Executive",
                area: 100.0,
                status: Booked,
                price: 4500,
                position: [-1.5, 0.0, 0.7],
                size: [0.9, 0.15, 1.0],
                color: "#D4B896",
                description: "高规格私密套房，集休息、会客于一体",
                image: None,
            },
            ZoneRow {
                id: "6f-presidential",
                name: "总裁招待间",
                name_en: "Presidential Reception Suite",
                category: "Presidential",
                area: 150.0,
                status: Available,
                price: 6000,
                position: [0.5, 0.0, 0.5],
                size: [1.2, 0.15, 1.0],
                color: "#C4B8A8",
                description: "位于本层核心位置，非传统会议室，而是集休息、会客于一体的高规格私密套房",
                image: None,
            },
            ZoneRow {
                id: "6f-terrace",
                name: "景观露台",
                name_en: "Scenic Terrace",
                category: "Outdoor",
                area: 80.0,
                status: Available,
                price: 3000,
                position: [1.5, 0.0, -0.5],
                size: [0.8, 0.15, 1.0],
                color: "#A8C4B8",
                description: "连接室内的户外休闲区域，可俯瞰城市景观",
                image: None,
            },
        ],
    },
];
