//! Seed dataset standing in for the marketplace backend.
//!
//! Ids are deterministic so applications and chat threads can reference
//! listings across process restarts.

use crate::domain::chat::{ChatMessage, Conversation};
use crate::domain::housing::application::{ApplicationStatus, RentalApplication, StudentInfo};
use crate::domain::housing::listing::{GenderPolicy, Listing, ListingStatus, RoomType};
use crate::domain::housing::university::{Region, University};
use crate::domain::locale::LocalizedText;
use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal_macros::dec;
use uuid::Uuid;

pub const LANDLORD_ID: Uuid = Uuid::from_u128(0x1001);

const LISTING_IDS: [Uuid; 3] = [
    Uuid::from_u128(0x2001),
    Uuid::from_u128(0x2002),
    Uuid::from_u128(0x2003),
];

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

pub fn sample_universities() -> Vec<University> {
    vec![
        University {
            code: "TATU".to_string(),
            name: LocalizedText::new(
                "Toshkent Axborot Texnologiyalari Universiteti",
                "Ташкентский университет информационных технологий",
            ),
            location: LocalizedText::new("Toshkent", "Ташкент"),
        },
        University {
            code: "NUUz".to_string(),
            name: LocalizedText::new(
                "O'zbekiston Milliy Universiteti",
                "Национальный университет Узбекистана",
            ),
            location: LocalizedText::new("Toshkent", "Ташкент"),
        },
        University {
            code: "TIQXMMI".to_string(),
            name: LocalizedText::new(
                "Toshkent Irrigatsiya va Qishloq Xo'jaligi Mexanizatsiyasi Instituti",
                "Ташкентский институт ирригации и механизации сельского хозяйства",
            ),
            location: LocalizedText::new("Toshkent", "Ташкент"),
        },
        University {
            code: "SamDU".to_string(),
            name: LocalizedText::new(
                "Samarqand Davlat Universiteti",
                "Самаркандский государственный университет",
            ),
            location: LocalizedText::new("Samarqand", "Самарканд"),
        },
        University {
            code: "BuxDU".to_string(),
            name: LocalizedText::new(
                "Buxoro Davlat Universiteti",
                "Бухарский государственный университет",
            ),
            location: LocalizedText::new("Buxoro", "Бухара"),
        },
    ]
}

pub fn regions() -> Vec<Region> {
    let pairs = [
        ("toshkent", "Toshkent", "Ташкент"),
        ("samarqand", "Samarqand", "Самарканд"),
        ("buxoro", "Buxoro", "Бухара"),
        ("andijon", "Andijon", "Андижан"),
        ("fargona", "Farg'ona", "Фергана"),
        ("namangan", "Namangan", "Наманган"),
        ("qashqadaryo", "Qashqadaryo", "Кашкадарья"),
        ("surxondaryo", "Surxondaryo", "Сурхандарья"),
        ("sirdaryo", "Sirdaryo", "Сырдарья"),
        ("jizzax", "Jizzax", "Джизак"),
        ("navoiy", "Navoiy", "Навои"),
        ("xorazm", "Xorazm", "Хорезм"),
        ("qoraqalpogiston", "Qoraqalpog'iston", "Каракалпакстан"),
    ];
    pairs
        .into_iter()
        .map(|(value, uz, ru)| Region {
            value: value.to_string(),
            label: LocalizedText::new(uz, ru),
        })
        .collect()
}

fn amenities(pairs: &[(&str, &str)]) -> Vec<LocalizedText> {
    pairs
        .iter()
        .map(|(uz, ru)| LocalizedText::new(*uz, *ru))
        .collect()
}

pub fn sample_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: LISTING_IDS[0],
            title: LocalizedText::new(
                "Zamonaviy xonadon TATU yaqinida",
                "Современная квартира рядом с TATU",
            ),
            description: LocalizedText::new(
                "Universitetdan 5 daqiqa masofada joylashgan zamonaviy xonadon. Barcha qulayliklar mavjud.",
                "Современная квартира в 5 минутах от университета. Все удобства в наличии.",
            ),
            price: dec!(1_200_000),
            location: LocalizedText::new("Chilonzor tumani, Toshkent", "Чиланзарский район, Ташкент"),
            address: "Chilonzor ko'chasi, 15-uy".to_string(),
            university: "TATU".to_string(),
            distance_from_university_km: 0.5,
            images: vec![
                "https://images.pexels.com/photos/1571460/pexels-photo-1571460.jpeg".to_string(),
                "https://images.pexels.com/photos/1571463/pexels-photo-1571463.jpeg".to_string(),
            ],
            amenities: amenities(&[
                ("WiFi", "WiFi"),
                ("Konditsioner", "Кондиционер"),
                ("Kir yuvish mashinasi", "Стиральная машина"),
                ("Oshxona", "Кухня"),
                ("Parking", "Парковка"),
            ]),
            rating: 4.8,
            review_count: 24,
            room_type: RoomType::Shared,
            gender: GenderPolicy::Coed,
            available: true,
            total_rooms: 4,
            available_rooms: 2,
            landlord_id: LANDLORD_ID,
            rules: amenities(&[
                ("Sigaret chekish taqiqlangan", "Курение запрещено"),
                ("Hayvon boqish mumkin emas", "Животные не разрешены"),
            ]),
            created_at: date(2024, 1, 15),
            updated_at: date(2024, 1, 20),
            status: ListingStatus::Active,
            featured: true,
        },
        Listing {
            id: LISTING_IDS[1],
            title: LocalizedText::new(
                "Qulay xonadon NUUz yaqinida",
                "Удобная квартира рядом с НУУз",
            ),
            description: LocalizedText::new(
                "Shahar markazida joylashgan qulay xonadon. Transport bog'lanishi yaxshi.",
                "Удобная квартира в центре города. Хорошее транспортное сообщение.",
            ),
            price: dec!(1_500_000),
            location: LocalizedText::new("Olmazor tumani, Toshkent", "Алмазарский район, Ташкент"),
            address: "Olmazor ko'chasi, 25-uy".to_string(),
            university: "NUUz".to_string(),
            distance_from_university_km: 0.8,
            images: vec![
                "https://images.pexels.com/photos/1571470/pexels-photo-1571470.jpeg".to_string(),
            ],
            amenities: amenities(&[
                ("WiFi", "WiFi"),
                ("Issiq suv", "Горячая вода"),
                ("Muzlatgich", "Холодильник"),
                ("Balkon", "Балкон"),
            ]),
            rating: 4.5,
            review_count: 18,
            room_type: RoomType::Single,
            gender: GenderPolicy::Female,
            available: true,
            total_rooms: 2,
            available_rooms: 1,
            landlord_id: LANDLORD_ID,
            rules: amenities(&[
                ("Faqat qizlar uchun", "Только для девушек"),
                ("Mehmon taqiqlangan", "Гости запрещены"),
            ]),
            created_at: date(2024, 1, 10),
            updated_at: date(2024, 1, 18),
            status: ListingStatus::Active,
            featured: false,
        },
        Listing {
            id: LISTING_IDS[2],
            title: LocalizedText::new(
                "Arzon xonadon TIQXMMI yaqinida",
                "Недорогая квартира рядом с ТИХММИ",
            ),
            description: LocalizedText::new(
                "Talabalar uchun qulay narxda xonadon. Asosiy qulayliklar mavjud.",
                "Квартира по доступной цене для студентов. Основные удобства в наличии.",
            ),
            price: dec!(900_000),
            location: LocalizedText::new("Sergeli tumani, Toshkent", "Сергелийский район, Ташкент"),
            address: "Sergeli ko'chasi, 10-uy".to_string(),
            university: "TIQXMMI".to_string(),
            distance_from_university_km: 1.2,
            images: vec![
                "https://images.pexels.com/photos/1571459/pexels-photo-1571459.jpeg".to_string(),
            ],
            amenities: amenities(&[
                ("WiFi", "WiFi"),
                ("Issiq suv", "Горячая вода"),
                ("Oshxona", "Кухня"),
            ]),
            rating: 4.2,
            review_count: 12,
            room_type: RoomType::Shared,
            gender: GenderPolicy::Male,
            available: false,
            total_rooms: 3,
            available_rooms: 0,
            landlord_id: LANDLORD_ID,
            rules: amenities(&[
                ("Faqat o'g'il talabalar", "Только для студентов мужского пола"),
                ("Kechqurun tinchlik", "Тишина вечером"),
            ]),
            created_at: date(2024, 1, 5),
            updated_at: date(2024, 1, 15),
            status: ListingStatus::Active,
            featured: false,
        },
    ]
}

pub fn sample_applications(listings: &[Listing]) -> Vec<RentalApplication> {
    let first = listings.first().map(|l| l.id).unwrap_or(LISTING_IDS[0]);
    let second = listings.get(1).map(|l| l.id).unwrap_or(LISTING_IDS[1]);

    // Relative dates so the pending one never starts out past the
    // expiry window.
    let now = Utc::now();

    vec![
        RentalApplication {
            id: Uuid::from_u128(0x3001),
            listing_id: first,
            status: ApplicationStatus::Pending,
            submitted_at: now - Duration::days(2),
            student: StudentInfo {
                full_name: "Aziza Karimova".to_string(),
                email: "aziza.karimova@student.uz".to_string(),
                phone: "+998901234567".to_string(),
                university: "TATU".to_string(),
                study_program: "Kompyuter injinirligi".to_string(),
                student_id: "ST2024001".to_string(),
            },
            move_in_date: now + Duration::days(10),
            duration: "1 yil".to_string(),
            message: "Assalomu alaykum! Men TATU 2-kurs talabasi. Xonadon juda yoqdi, ariza bermoqchiman.".to_string(),
            landlord_response: None,
            documents: vec!["student_id.pdf".to_string(), "passport.pdf".to_string()],
        },
        RentalApplication {
            id: Uuid::from_u128(0x3002),
            listing_id: second,
            status: ApplicationStatus::Accepted,
            submitted_at: now - Duration::days(4),
            student: StudentInfo {
                full_name: "Nilufar Saidova".to_string(),
                email: "nilufar.saidova@student.uz".to_string(),
                phone: "+998901234568".to_string(),
                university: "NUUz".to_string(),
                study_program: "Matematika".to_string(),
                student_id: "ST2024002".to_string(),
            },
            move_in_date: now + Duration::days(24),
            duration: "6 oy".to_string(),
            message: "Salom! Xonadon juda chiroyli ko'rinadi. Qabul qilsangiz juda xursand bo'laman.".to_string(),
            landlord_response: Some(
                "Assalomu alaykum! Arizangiz qabul qilindi. Ertaga uchrashib gaplashamiz.".to_string(),
            ),
            documents: vec!["student_id.pdf".to_string()],
        },
        RentalApplication {
            id: Uuid::from_u128(0x3003),
            listing_id: first,
            status: ApplicationStatus::Rejected,
            submitted_at: now - Duration::days(6),
            student: StudentInfo {
                full_name: "Bekzod Alimov".to_string(),
                email: "bekzod.alimov@student.uz".to_string(),
                phone: "+998901234569".to_string(),
                university: "TATU".to_string(),
                study_program: "Dasturiy injiniring".to_string(),
                student_id: "ST2024003".to_string(),
            },
            move_in_date: now + Duration::days(3),
            duration: "1 yil".to_string(),
            message: "Salom! Bu xonadon menga juda mos keladi. Ariza beraman.".to_string(),
            landlord_response: Some("Kechirasiz, boshqa talaba tanlandi.".to_string()),
            documents: vec!["student_id.pdf".to_string(), "passport.pdf".to_string()],
        },
    ]
}

pub fn sample_conversations() -> Vec<Conversation> {
    vec![
        Conversation {
            id: Uuid::from_u128(0x4001),
            participant_id: "2".to_string(),
            participant_name: "Aziza Karimova".to_string(),
            participant_avatar: None,
            listing_title: Some("Zamonaviy xonadon TATU yaqinida".to_string()),
            last_message: "Xonadon hali bo'shmi?".to_string(),
            last_message_at: Utc.with_ymd_and_hms(2024, 1, 22, 14, 30, 0).unwrap(),
            unread_count: 2,
        },
        Conversation {
            id: Uuid::from_u128(0x4002),
            participant_id: "3".to_string(),
            participant_name: "Bekzod Alimov".to_string(),
            participant_avatar: None,
            listing_title: Some("Qulay xonadon NUUz yaqinida".to_string()),
            last_message: "Rahmat, kelishib oldik".to_string(),
            last_message_at: Utc.with_ymd_and_hms(2024, 1, 21, 16, 45, 0).unwrap(),
            unread_count: 0,
        },
        Conversation {
            id: Uuid::from_u128(0x4003),
            participant_id: "4".to_string(),
            participant_name: "Nilufar Saidova".to_string(),
            participant_avatar: None,
            listing_title: Some("Arzon xonadon TIQXMMI yaqinida".to_string()),
            last_message: "Ertaga ko'rishib gaplashamizmi?".to_string(),
            last_message_at: Utc.with_ymd_and_hms(2024, 1, 20, 10, 15, 0).unwrap(),
            unread_count: 1,
        },
    ]
}

pub fn sample_thread(conversation: &Conversation, owner_id: &str, owner_name: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            id: Uuid::from_u128(0x5001),
            sender_id: conversation.participant_id.clone(),
            sender_name: conversation.participant_name.clone(),
            body: "Assalomu alaykum! Sizning e'loningizni ko'rdim.".to_string(),
            sent_at: Utc.with_ymd_and_hms(2024, 1, 22, 14, 0, 0).unwrap(),
            read: true,
        },
        ChatMessage {
            id: Uuid::from_u128(0x5002),
            sender_id: owner_id.to_string(),
            sender_name: owner_name.to_string(),
            body: "Vaalaykum assalom! Qanday yordam bera olaman?".to_string(),
            sent_at: Utc.with_ymd_and_hms(2024, 1, 22, 14, 5, 0).unwrap(),
            read: true,
        },
        ChatMessage {
            id: Uuid::from_u128(0x5003),
            sender_id: conversation.participant_id.clone(),
            sender_name: conversation.participant_name.clone(),
            body: conversation.last_message.clone(),
            sent_at: conversation.last_message_at,
            read: false,
        },
    ]
}

/// Six months of revenue history for the analytics view, in so'm.
pub fn revenue_history() -> Vec<(LocalizedText, rust_decimal::Decimal)> {
    vec![
        (LocalizedText::new("Yanvar", "Январь"), dec!(3_200_000)),
        (LocalizedText::new("Fevral", "Февраль"), dec!(3_800_000)),
        (LocalizedText::new("Mart", "Март"), dec!(4_200_000)),
        (LocalizedText::new("Aprel", "Апрель"), dec!(4_500_000)),
        (LocalizedText::new("May", "Май"), dec!(4_800_000)),
        (LocalizedText::new("Iyun", "Июнь"), dec!(5_200_000)),
    ]
}

/// Applications received per month, same period as `revenue_history`.
pub fn application_history() -> Vec<(LocalizedText, u32)> {
    vec![
        (LocalizedText::new("Yanvar", "Январь"), 12),
        (LocalizedText::new("Fevral", "Февраль"), 18),
        (LocalizedText::new("Mart", "Март"), 25),
        (LocalizedText::new("Aprel", "Апрель"), 22),
        (LocalizedText::new("May", "Май"), 28),
        (LocalizedText::new("Iyun", "Июнь"), 32),
    ]
}

/// View counters per listing id, most viewed first.
pub fn listing_views() -> Vec<(Uuid, u32)> {
    vec![
        (LISTING_IDS[0], 245),
        (LISTING_IDS[1], 189),
        (LISTING_IDS[2], 156),
    ]
}
