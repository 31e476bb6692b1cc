pub struct TopicDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub examples: &'static str,
}

pub const BUILTIN_TOPICS: &[TopicDef] = &[
    TopicDef {
        id: "indian_history",
        name: "Indian History",
        description: "Freedom fighters, ancient India, empires and kingdoms",
        icon: "🇮🇳",
        examples: "Mahatma Gandhi, Chandragupta Maurya, Ashoka, Mughal Empire, British Rule",
    },
    TopicDef {
        id: "tamil_history",
        name: "Tamil History",
        description: "Chola, Pandya, Chera kingdoms and Tamil culture",
        icon: "🏛️",
        examples: "Raja Raja Chola, Thiruvalluvar, Sangam literature, Brihadeeswarar Temple",
    },
    TopicDef {
        id: "world_history",
        name: "World History",
        description: "World wars, ancient civilizations, famous leaders",
        icon: "🌍",
        examples: "World War II, Egyptian pyramids, Alexander the Great, Renaissance",
    },
    TopicDef {
        id: "science_nature",
        name: "Science & Nature",
        description: "Animals, plants, human body, space",
        icon: "🔬",
        examples: "Photosynthesis, human organs, gravity, electricity, magnets",
    },
    TopicDef {
        id: "geography",
        name: "Geography",
        description: "Countries, capitals, rivers, mountains",
        icon: "🗺️",
        examples: "India states, world capitals, Himalayan rivers, continents",
    },
    TopicDef {
        id: "space_astronomy",
        name: "Space & Astronomy",
        description: "Planets, stars, ISRO missions, astronauts",
        icon: "🚀",
        examples: "Solar system, Chandrayaan, Kalpana Chawla, black holes",
    },
    TopicDef {
        id: "sports",
        name: "Sports",
        description: "Cricket, Olympics, football, famous players",
        icon: "🏏",
        examples: "Sachin Tendulkar, Olympics, FIFA World Cup, Kabaddi",
    },
    TopicDef {
        id: "technology",
        name: "Technology",
        description: "Computers, internet, inventions, gadgets",
        icon: "💻",
        examples: "Computer parts, internet, mobile phones, AI",
    },
    TopicDef {
        id: "mathematics",
        name: "Mathematics",
        description: "Fun math puzzles and number facts",
        icon: "🔢",
        examples: "Basic arithmetic, shapes, famous mathematicians, number patterns",
    },
    TopicDef {
        id: "indian_culture",
        name: "Indian Culture",
        description: "Festivals, traditions, classical arts, dance",
        icon: "🪔",
        examples: "Diwali, Bharatanatyam, classical music, Indian cuisine",
    },
    TopicDef {
        id: "environment",
        name: "Environment",
        description: "Climate, pollution, conservation, wildlife",
        icon: "🌳",
        examples: "Global warming, recycling, endangered species, forests",
    },
    TopicDef {
        id: "famous_people",
        name: "Famous People",
        description: "Scientists, leaders, artists, inventors",
        icon: "👨‍🔬",
        examples: "APJ Abdul Kalam, Marie Curie, Leonardo da Vinci, Edison",
    },
    TopicDef {
        id: "current_affairs",
        name: "Current Affairs",
        description: "Recent events, news, achievements",
        icon: "📰",
        examples: "G20 Summit India, Chandrayaan-3, recent Olympics winners",
    },
    TopicDef {
        id: "mythology",
        name: "Indian Mythology",
        description: "Ramayana, Mahabharata, gods and legends",
        icon: "🏹",
        examples: "Lord Rama, Pandavas, Hanuman, Krishna, Durga",
    },
    TopicDef {
        id: "literature",
        name: "Literature",
        description: "Famous books, authors, poetry",
        icon: "📚",
        examples: "Rabindranath Tagore, Panchatantra, Harry Potter, famous poets",
    },
    TopicDef {
        id: "music_arts",
        name: "Music & Arts",
        description: "Musical instruments, paintings, artists",
        icon: "🎵",
        examples: "Tabla, Veena, M.F. Husain, Raja Ravi Varma",
    },
    TopicDef {
        id: "animals",
        name: "Animals",
        description: "Wildlife, pets, marine life, insects",
        icon: "🦁",
        examples: "National animal, endangered species, animal habitats, adaptations",
    },
    TopicDef {
        id: "food_nutrition",
        name: "Food & Nutrition",
        description: "Healthy eating, cuisines, vitamins",
        icon: "🍎",
        examples: "Vitamins, Indian dishes, healthy foods, proteins",
    },
    TopicDef {
        id: "inventions",
        name: "Inventions",
        description: "Who invented what, famous discoveries",
        icon: "💡",
        examples: "Light bulb, telephone, zero, printing press",
    },
    TopicDef {
        id: "monuments",
        name: "Monuments & Wonders",
        description: "World wonders, famous buildings, heritage sites",
        icon: "🏰",
        examples: "Taj Mahal, Great Wall, Eiffel Tower, Qutub Minar",
    },
];

/// Variant spellings seen in generated output, mapped to catalog ids.
pub const TOPIC_ALIASES: &[(&str, &str)] = &[
    // space
    ("space", "space_astronomy"),
    ("space_earth", "space_astronomy"),
    ("space_india", "space_astronomy"),
    ("space_physics", "space_astronomy"),
    // science
    ("human_body", "science_nature"),
    ("human body", "science_nature"),
    ("human_organs", "science_nature"),
    ("biology", "science_nature"),
    ("chemistry", "science_nature"),
    ("physics", "science_nature"),
    ("photosynthesis", "science_nature"),
    ("science_general", "science_nature"),
    ("science_history", "science_nature"),
    ("science_india", "science_nature"),
    // nature
    ("nature", "environment"),
    ("nature in india", "environment"),
    ("plants", "environment"),
    ("plants_india", "environment"),
    ("plants_animals", "animals"),
    ("earth_science", "geography"),
    ("earth_science_india", "geography"),
    ("electricity_magnets", "technology"),
    ("animals_india", "animals"),
    // sports
    ("cricket", "sports"),
    ("football", "sports"),
    ("kabaddi", "sports"),
    ("olympics", "sports"),
    ("paralympics", "sports"),
    ("sports events", "sports"),
    ("sports general", "sports"),
    ("hockey", "sports"),
    ("badminton", "sports"),
    ("tennis", "sports"),
    ("swimming", "sports"),
    ("athletics", "sports"),
    ("archery", "sports"),
    ("boxing", "sports"),
    ("chess", "sports"),
    ("volleyball", "sports"),
    ("wrestling", "sports"),
    ("shooting", "sports"),
    ("snooker", "sports"),
    ("motorsport", "sports"),
    ("martial arts", "sports"),
    ("winter sports", "sports"),
    // technology
    ("computers", "technology"),
    ("internet", "technology"),
    ("gadgets", "technology"),
    // monuments
    ("monuments_wonders", "monuments"),
    ("monuments-wonders", "monuments"),
];
