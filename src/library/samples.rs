use super::model::{LibraryCategory, LibraryItem};

fn item(title: &str, description: &str) -> LibraryItem {
    LibraryItem {
        title: title.to_string(),
        description: description.to_string(),
    }
}

pub(crate) fn sample_items(category: LibraryCategory) -> Vec<LibraryItem> {
    match category {
        LibraryCategory::Tips => vec![
            item(
                "Plan Meals to Cut Food Waste",
                "Write a weekly menu, shop from a list and store leftovers in clear containers so they get eaten.",
            ),
            item(
                "Set Up a Two-Bin Kitchen",
                "Keep recycling next to the trash so sorting takes no extra steps, and rinse containers before they go in.",
            ),
            item(
                "Refuse Before You Recycle",
                "Decline freebies, receipts and excess packaging; the least waste is the waste never brought home.",
            ),
            item(
                "Repair First",
                "Keep a small kit of glue, thread and screwdrivers and try a fix before replacing broken items.",
            ),
        ],
        LibraryCategory::Recipes => vec![
            item(
                "One-Pot Lentil Stew",
                "Simmer red lentils with onion, garlic, carrots, canned tomatoes and cumin for 25 minutes; finish with lemon.",
            ),
            item(
                "Chickpea Salad Sandwich",
                "Mash chickpeas with mustard, diced celery and herbs; serve on whole-grain bread.",
            ),
            item(
                "Vegetable Fried Rice",
                "Stir-fry day-old rice with frozen peas, carrots, scallions, tofu and soy sauce.",
            ),
            item(
                "Overnight Oats",
                "Combine oats, plant milk, chia seeds and fruit in a jar and refrigerate overnight.",
            ),
        ],
        LibraryCategory::DiyProjects => vec![
            item(
                "Jar Herb Garden",
                "Clean glass jars, add pebbles for drainage, then soil and herb seedlings for a windowsill garden.",
            ),
            item(
                "T-Shirt Tote Bag",
                "Cut off the sleeves and neckline of an old T-shirt and knot the bottom hem closed.",
            ),
            item(
                "Pallet Shelf",
                "Sand a wooden pallet, cut it to size and mount it as a rustic wall shelf.",
            ),
            item(
                "Tin Can Organizer",
                "Wrap cleaned cans with fabric scraps or paint and use them for pens and tools.",
            ),
        ],
    }
}
