use crate::domain::model::{SocialPlatform, TeamMember};
use crate::domain::model::SocialPlatform::{Github, Homepage, Instagram, Twitter};

struct FallbackEntry {
    id: &'static str,
    name: &'static str,
    bio: &'static str,
    image: &'static str,
    image_alt: &'static str,
    social: &'static [(SocialPlatform, &'static str)],
}

static FALLBACK_TEAM: [FallbackEntry; 15] = [
    FallbackEntry {
        id: "pitang1965",
        name: "ピータン",
        bio: "Webアプリの個人開発ができるようになるための2019年1月からの学習を、React等を2022年1月からWeb開発を継続しています。趣味はランニングとシミュレータで運転活動。<br>中国語。",
        image: "/images/team/pitang.jpg",
        image_alt: "ピータンのプロフィール写真",
        social: &[
            (Twitter, "pitang1965"),
            (Github, "pitang1965"),
            (Homepage, "https://pitang1965.com"),
            (Instagram, "pitang1965"),
        ],
    },
    FallbackEntry {
        id: "son",
        name: "そんほんす",
        bio: "2023年3月頃から主婦。コーディングとかWebサイト制作の個人事業主です。",
        image: "/images/team/son.jpg",
        image_alt: "そんほんすのプロフィール写真",
        social: &[(Twitter, "horumont"), (Github, "horumont")],
    },
    FallbackEntry {
        id: "nagataku",
        name: "ながたく",
        bio: "JavaScript サイトをしっかり作る機能を身につけたくて参加させていただいています。楽しく学ばせていただいています。よろしくお願いします。",
        image: "/images/team/torikai.jpg",
        image_alt: "ながたくのプロフィール写真",
        social: &[(Twitter, "_return_null_"), (Github, "takunagai")],
    },
    FallbackEntry {
        id: "maki-daisuke",
        name: "まき だいすけ",
        bio: "フルスタック開発者として活動。<br>コミュニティの技術向上に貢献しています。",
        image: "/images/team/maki-daisuke.jpg",
        image_alt: "まき だいすけのプロフィール写真",
        social: &[(Twitter, "maki_daisuke"), (Github, "maki-daisuke")],
    },
    FallbackEntry {
        id: "shinnosuke",
        name: "しんのすけ",
        bio: "Web技術の探求と実践を続けています。<br>新しい挑戦を楽しんでいます。",
        image: "/images/team/shinnosuke.jpg",
        image_alt: "しんのすけのプロフィール写真",
        social: &[(Twitter, "shinnosuke_web"), (Github, "shinnosuke")],
    },
    FallbackEntry {
        id: "yasuji-nakanishi",
        name: "中西 やすじ",
        bio: "デザインとフロントエンド開発を担当。<br>ユーザー体験の向上を重視しています。",
        image: "/images/team/yasuji-nakanishi.jpg",
        image_alt: "中西 やすじのプロフィール写真",
        social: &[(Twitter, "yasuji_nakanishi"), (Github, "yasuji-nakanishi")],
    },
    FallbackEntry {
        id: "bat",
        name: "ばっと",
        bio: "Web開発の学習を続けています。<br>コミュニティでの交流を大切にしています。",
        image: "/images/team/bat.jpg",
        image_alt: "ばっとのプロフィール写真",
        social: &[(Twitter, "bat_web"), (Github, "bat")],
    },
    FallbackEntry {
        id: "damgo",
        name: "だむご",
        bio: "フロントエンド技術に興味があります。<br>日々学習を重ねています。",
        image: "/images/team/damgo.jpg",
        image_alt: "だむごのプロフィール写真",
        social: &[(Twitter, "damgo_dev"), (Github, "damgo")],
    },
    FallbackEntry {
        id: "hgnsuika",
        name: "はぐんすいか",
        bio: "Web開発の楽しさを追求しています。<br>新しい技術に挑戦中です。",
        image: "/images/team/hgnsuika.jpg",
        image_alt: "はぐんすいかのプロフィール写真",
        social: &[(Twitter, "hgnsuika"), (Github, "hgnsuika")],
    },
    FallbackEntry {
        id: "kamiking",
        name: "かみきんぐ",
        bio: "プログラミングの学習を楽しんでいます。<br>コミュニティ活動に積極的に参加しています。",
        image: "/images/team/kamiking.jpg",
        image_alt: "かみきんぐのプロフィール写真",
        social: &[(Twitter, "kamiking_dev"), (Github, "kamiking")],
    },
    FallbackEntry {
        id: "kunshi",
        name: "くんし",
        bio: "Web技術の習得に励んでいます。<br>チーム開発の経験を積みたいと思っています。",
        image: "/images/team/kunshi.jpg",
        image_alt: "くんしのプロフィール写真",
        social: &[(Twitter, "kunshi_web"), (Github, "kunshi")],
    },
    FallbackEntry {
        id: "miemo",
        name: "みえも",
        bio: "デザインとコーディングの両方に興味があります。<br>ユーザビリティを重視した開発を心がけています。",
        image: "/images/team/miemo.jpg",
        image_alt: "みえものプロフィール写真",
        social: &[(Twitter, "miemo_design"), (Github, "miemo")],
    },
    FallbackEntry {
        id: "naozo",
        name: "なおぞー",
        bio: "バックエンド開発を中心に学習しています。<br>効率的なシステム構築を目指しています。",
        image: "/images/team/naozo.jpg",
        image_alt: "なおぞーのプロフィール写真",
        social: &[(Twitter, "naozo_dev"), (Github, "naozo")],
    },
    FallbackEntry {
        id: "rumiko",
        name: "るみこ",
        bio: "Web開発の基礎から応用まで幅広く学習中です。<br>チームワークを大切にしています。",
        image: "/images/team/rumiko.jpg",
        image_alt: "るみこのプロフィール写真",
        social: &[(Twitter, "rumiko_web"), (Github, "rumiko")],
    },
    FallbackEntry {
        id: "yoko",
        name: "よーこ",
        bio: "フロントエンド開発に情熱を注いでいます。<br>アクセシビリティを重視した開発を心がけています。",
        image: "/images/team/yoko.jpg",
        image_alt: "よーこのプロフィール写真",
        social: &[(Twitter, "yoko_frontend"), (Github, "yoko")],
    },
];

impl FallbackEntry {
    fn to_member(&self) -> TeamMember {
        TeamMember {
            id: self.id.to_string(),
            name: self.name.to_string(),
            bio: self.bio.to_string(),
            image: self.image.to_string(),
            image_alt: self.image_alt.to_string(),
            social: self
                .social
                .iter()
                .map(|(platform, handle)| (*platform, handle.to_string()))
                .collect(),
        }
    }
}

/// The hand-maintained roster shown when the source yields nothing.
pub fn fallback_members() -> Vec<TeamMember> {
    FALLBACK_TEAM.iter().map(FallbackEntry::to_member).collect()
}
