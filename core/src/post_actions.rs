//! Post actions bound to the current user.
//!
//! Wraps a [`PostBoard`] with the draft post being written, the posts created
//! during this session, and the compound "delete user with their posts"
//! operation.

use tracing::{debug, info};

use crate::posts::PostBoard;
use crate::repository::{PostRepository, UserRepository};
use crate::sampler::{RandomSampler, Sampler};
use crate::session::UserSession;
use crate::types::{CreatePost, Post, User};
use crate::validation::PostErrors;

/// How many other users `other_users` shows at most.
pub const OTHER_USERS_SHOWN: usize = 2;

#[derive(Debug)]
pub struct PostActions<R, S = RandomSampler> {
    board: PostBoard<R>,
    sampler: S,
    draft: CreatePost,
    created: Vec<Post>,
    creating: bool,
}

impl<R: PostRepository> PostActions<R, RandomSampler> {
    pub fn new(board: PostBoard<R>) -> Self {
        Self::with_sampler(board, RandomSampler::new())
    }
}

impl<R: PostRepository, S: Sampler> PostActions<R, S> {
    pub fn with_sampler(board: PostBoard<R>, sampler: S) -> Self {
        Self {
            board,
            sampler,
            draft: CreatePost::default(),
            created: Vec::new(),
            creating: false,
        }
    }

    pub fn board(&self) -> &PostBoard<R> {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut PostBoard<R> {
        &mut self.board
    }

    pub fn draft(&self) -> &CreatePost {
        &self.draft
    }

    pub fn created_posts(&self) -> &[Post] {
        &self.created
    }

    pub fn is_creating(&self) -> bool {
        self.creating
    }

    pub fn errors(&self) -> &PostErrors {
        self.board.errors()
    }

    /// Replaces the draft's title and body. The owner stays bound to the
    /// selected user through `sync_owner`.
    pub fn set_draft(&mut self, draft: CreatePost) {
        self.draft.title = draft.title;
        self.draft.body = draft.body;
    }

    pub fn set_creating(&mut self, creating: bool) {
        self.creating = creating;
    }

    /// Points the draft at the selected user, or at id 0 when nobody is selected.
    pub fn sync_owner(&mut self, selected: Option<&User>) {
        self.draft.user_id = selected.map_or(0, |user| user.id);
    }

    /// Creates the draft as a post owned by `selected`.
    ///
    /// On success the post is remembered as created in this session, the
    /// draft is reset and the form closes. Without a selected user nothing
    /// happens.
    pub fn create(&mut self, selected: Option<&User>) -> Option<Post> {
        let user = selected?;
        let input = CreatePost {
            user_id: user.id,
            ..self.draft.clone()
        };
        let post = self.board.create(&input)?;
        self.created.push(post.clone());
        self.draft = CreatePost::empty_for(user.id);
        self.creating = false;
        Some(post)
    }

    /// Deletes a post and forgets it from the session's created posts.
    pub fn delete(&mut self, post_id: u64) -> bool {
        if !self.board.delete(post_id) {
            return false;
        }
        self.created.retain(|post| post.id != post_id);
        true
    }

    /// Whether `selected` already created a post in this session.
    pub fn has_created_post(&self, selected: Option<&User>) -> bool {
        selected.is_some_and(|user| self.created.iter().any(|post| post.user_id == user.id))
    }

    /// Up to two users other than `selected`, in no stable order.
    pub fn other_users(&mut self, selected: Option<&User>, users: &[User]) -> Vec<User> {
        let selected_id = selected.map(|user| user.id);
        let others: Vec<User> = users.iter().filter(|user| Some(user.id) != selected_id).cloned().collect();
        self.sampler.sample(&others, OTHER_USERS_SHOWN)
    }

    /// Deletes the user, then each post created this session by that user,
    /// one after another.
    ///
    /// If the user deletion fails no post is touched. Returns whether the
    /// user was deleted.
    pub fn delete_user_cascade<U, T>(&mut self, session: &mut UserSession<U, T>, user_id: u64) -> bool
    where
        U: UserRepository,
        T: Sampler,
    {
        if !session.delete_user(user_id) {
            return false;
        }
        let owned: Vec<u64> = self
            .created
            .iter()
            .filter(|post| post.user_id == user_id)
            .map(|post| post.id)
            .collect();
        debug!(user_id, posts = owned.len(), "cascading user deletion");
        for post_id in owned {
            self.delete(post_id);
        }
        self.sync_owner(session.selected());
        info!(user_id, "user and their posts deleted");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Operation;
    use crate::sampler::FirstSampler;
    use crate::service::{PostService, UserService};
    use crate::testing::{sample_posts, sample_users, FakePosts, FakeUsers};

    fn actions(repo: &FakePosts) -> PostActions<FakePosts, FirstSampler> {
        PostActions::with_sampler(PostBoard::new(PostService::new(repo.clone())), FirstSampler)
    }

    fn logged_in_session(repo: &FakeUsers) -> UserSession<FakeUsers, FirstSampler> {
        let mut session = UserSession::with_sampler(UserService::new(repo.clone()), FirstSampler);
        session.load();
        session
    }

    fn draft(title: &str, body: &str) -> CreatePost {
        CreatePost {
            title: title.to_string(),
            body: body.to_string(),
            user_id: 0,
        }
    }

    #[test]
    fn owner_follows_selected_user() {
        let mut actions = actions(&FakePosts::default());
        let users = sample_users(2);
        actions.sync_owner(Some(&users[1]));
        assert_eq!(actions.draft().user_id, 2);
        actions.sync_owner(None);
        assert_eq!(actions.draft().user_id, 0);
    }

    #[test]
    fn set_draft_keeps_the_synced_owner() {
        let mut actions = actions(&FakePosts::default());
        let users = sample_users(2);
        actions.sync_owner(Some(&users[1]));
        actions.set_draft(draft("Test Post", "This is a test post"));
        assert_eq!(actions.draft().user_id, 2);
        assert_eq!(actions.draft().title, "Test Post");
        assert_eq!(actions.draft().body, "This is a test post");
    }

    #[test]
    fn create_records_post_and_resets_draft() {
        let repo = FakePosts::default();
        let mut actions = actions(&repo);
        let user = &sample_users(1)[0];
        actions.set_creating(true);
        actions.set_draft(draft("Test Post", "This is a test post"));

        let post = actions.create(Some(user)).unwrap();
        assert_eq!(post.user_id, user.id);
        assert_eq!(actions.created_posts(), &[post.clone()]);
        assert_eq!(actions.draft(), &CreatePost::empty_for(user.id));
        assert!(!actions.is_creating());
        assert!(actions.has_created_post(Some(user)));
        assert_eq!(actions.board().posts(), &[post]);
    }

    #[test]
    fn create_without_user_is_a_no_op() {
        let repo = FakePosts::default();
        let mut actions = actions(&repo);
        actions.set_draft(draft("Test Post", "This is a test post"));
        assert!(actions.create(None).is_none());
        assert!(repo.calls().is_empty());
    }

    #[test]
    fn invalid_draft_keeps_form_open() {
        let repo = FakePosts::default();
        let mut actions = actions(&repo);
        let user = &sample_users(1)[0];
        actions.set_creating(true);
        actions.set_draft(draft("abc", "short"));
        assert!(actions.create(Some(user)).is_none());
        assert!(actions.is_creating());
        assert!(actions.errors().title.is_some());
        assert!(actions.created_posts().is_empty());
    }

    #[test]
    fn delete_forgets_created_post() {
        let repo = FakePosts::default();
        let mut actions = actions(&repo);
        let user = &sample_users(1)[0];
        actions.set_draft(draft("Test Post", "This is a test post"));
        let post = actions.create(Some(user)).unwrap();

        assert!(actions.delete(post.id));
        assert!(actions.created_posts().is_empty());
        assert!(!actions.has_created_post(Some(user)));
        assert_eq!(repo.calls(), vec!["create_post:1".to_string(), format!("delete_post:{}", post.id)]);
    }

    #[test]
    fn failed_delete_keeps_created_post() {
        let repo = FakePosts::default();
        let mut actions = actions(&repo);
        let user = &sample_users(1)[0];
        actions.set_draft(draft("Test Post", "This is a test post"));
        actions.create(Some(user)).unwrap();
        repo.fail_on(Operation::DeletePost);

        assert!(!actions.delete(1));
        assert_eq!(actions.created_posts().len(), 1);
    }

    #[test]
    fn other_users_excludes_selected_and_caps_at_two() {
        let mut actions = actions(&FakePosts::default());
        let users = sample_users(5);
        let others = actions.other_users(Some(&users[0]), &users);
        let ids: Vec<u64> = others.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2, 3]);

        let mut random = PostActions::with_sampler(
            PostBoard::new(PostService::new(FakePosts::default())),
            RandomSampler::seeded(9),
        );
        for _ in 0..10 {
            let others = random.other_users(Some(&users[2]), &users);
            assert_eq!(others.len(), 2);
            assert!(others.iter().all(|u| u.id != 3));
        }
        assert!(random.other_users(Some(&users[0]), &users[..1]).is_empty());
    }

    #[test]
    fn cascade_deletes_user_then_their_posts() {
        let users = FakeUsers::with(sample_users(5));
        let posts = FakePosts::with(sample_posts(&[4]));
        let mut session = logged_in_session(&users);
        let mut actions = actions(&posts);
        actions.board_mut().load();

        let owner = session.selected().unwrap().clone();
        let other = sample_users(2)[1].clone();
        actions.set_draft(draft("First post", "Written by the owner"));
        actions.create(Some(&owner)).unwrap();
        actions.set_draft(draft("Second post", "Also by the owner"));
        actions.create(Some(&owner)).unwrap();
        actions.set_draft(draft("Other post", "Written by somebody else"));
        let kept = actions.create(Some(&other)).unwrap();

        assert!(actions.delete_user_cascade(&mut session, owner.id));

        assert!(session.users().iter().all(|u| u.id != owner.id));
        assert_eq!(actions.created_posts(), &[kept.clone()]);
        let remaining: Vec<u64> = actions.board().posts().iter().map(|p| p.id).collect();
        assert_eq!(remaining, vec![1, kept.id]);
        assert_eq!(
            posts.calls(),
            vec![
                "fetch_posts",
                "create_post:1",
                "create_post:1",
                "create_post:2",
                "delete_post:2",
                "delete_post:3",
            ]
        );
        assert_eq!(actions.draft().user_id, session.selected().unwrap().id);
    }

    #[test]
    fn cascade_stops_when_user_deletion_fails() {
        let users = FakeUsers::with(sample_users(5));
        users.fail_on(Operation::DeleteUser);
        let posts = FakePosts::default();
        let mut session = logged_in_session(&users);
        let mut actions = actions(&posts);
        let owner = session.selected().unwrap().clone();
        actions.set_draft(draft("First post", "Written by the owner"));
        actions.create(Some(&owner)).unwrap();

        assert!(!actions.delete_user_cascade(&mut session, owner.id));
        assert_eq!(actions.created_posts().len(), 1);
        assert_eq!(posts.calls(), vec!["create_post:1"]);
    }
}
