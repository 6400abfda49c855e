//! Seed data: the first records of the public JSONPlaceholder collections.

use crate::{Address, Company, Fixtures, Geo, Post, User};

pub fn fixtures() -> Fixtures {
    Fixtures {
        posts: posts(),
        users: users(),
    }
}

pub fn posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            user_id: 1,
            title: "sunt aut facere repellat provident occaecati excepturi optio reprehenderit"
                .to_string(),
            body: "quia et suscipit\nsuscipit recusandae consequuntur expedita et cum".to_string(),
        },
        Post {
            id: 2,
            user_id: 1,
            title: "qui est esse".to_string(),
            body: "est rerum tempore vitae\nsequi sint nihil reprehenderit dolor beatae ea dolores neque"
                .to_string(),
        },
        Post {
            id: 3,
            user_id: 2,
            title: "ea molestias quasi exercitationem repellat qui ipsa sit aut".to_string(),
            body: "et iusto sed quo iure\nvoluptatem occaecati omnis eligendi aut ad".to_string(),
        },
    ]
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Leanne Graham".to_string(),
            username: "Bret".to_string(),
            email: "Sincere@april.biz".to_string(),
            address: Address {
                street: "Kulas Light".to_string(),
                suite: "Apt. 556".to_string(),
                city: "Gwenborough".to_string(),
                zipcode: "92998-3874".to_string(),
                geo: Geo {
                    lat: "-37.3159".to_string(),
                    lng: "81.1496".to_string(),
                },
            },
            phone: "1-770-736-8031 x56442".to_string(),
            website: "hildegard.org".to_string(),
            company: Company {
                name: "Romaguera-Crona".to_string(),
                catch_phrase: "Multi-layered client-server neural-net".to_string(),
                bs: "harness real-time e-markets".to_string(),
            },
        },
        User {
            id: 2,
            name: "Ervin Howell".to_string(),
            username: "Antonette".to_string(),
            email: "Shanna@melissa.tv".to_string(),
            address: Address {
                street: "Victor Plains".to_string(),
                suite: "Suite 879".to_string(),
                city: "Wisokyburgh".to_string(),
                zipcode: "90566-7771".to_string(),
                geo: Geo {
                    lat: "-43.9509".to_string(),
                    lng: "-34.4618".to_string(),
                },
            },
            phone: "010-692-6593 x09125".to_string(),
            website: "anastasia.net".to_string(),
            company: Company {
                name: "Deckow-Crist".to_string(),
                catch_phrase: "Proactive didactic contingency".to_string(),
                bs: "synergize scalable supply-chains".to_string(),
            },
        },
    ]
}
